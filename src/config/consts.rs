/// Name under which the built-in overview template is registered
pub const DEFAULT_TEMPLATE_NAME: &str = "overview.html";
/// Log filter used when neither RUST_LOG nor the config file sets one
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Unknown template variables fail the render unless configured otherwise
pub const DEFAULT_STRICT_UNDEFINED: bool = true;
