// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{Context, Result};
use codemeta_overview::config::{load_config, OverviewConfig};
use codemeta_overview::observability::messages::{
    config::ConfigLoaded, render::RenderFailed, StructuredLog,
};
use codemeta_overview::overview::{OverviewTemplate, TemplateRenderer};
use codemeta_overview::traits::OverviewRenderer;
use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const STDIN_MARKER: &str = "-";

/// Parsed command line
#[derive(Debug, PartialEq)]
struct CliArgs {
    config: Option<PathBuf>,
    input: String,
    output: Option<PathBuf>,
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {0} [--config <config.yaml>] <software.json|-> [output.html]\n\
         Example: {0} fixtures/software.json overview.html\n\
         Example: {0} --config configs/overview.yaml - < fixtures/software.json",
        program
    )
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut config = None;
    let mut positional = Vec::new();

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = iter.next().ok_or("--config requires a file argument")?;
                config = Some(PathBuf::from(path));
            }
            _ => positional.push(arg.clone()),
        }
    }

    let mut positional = positional.into_iter();
    let input = positional.next().ok_or("missing input file")?;
    let output = positional.next().map(PathBuf::from);
    if positional.next().is_some() {
        return Err("too many arguments".to_string());
    }

    Ok(CliArgs {
        config,
        input,
        output,
    })
}

/// Initialize logging to stderr; RUST_LOG wins over the configured level
fn init_tracing(config: &OverviewConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn read_input(input: &str) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    if input == STDIN_MARKER {
        io::stdin()
            .read_to_end(&mut buffer)
            .context("Failed to read software records from stdin")?;
    } else {
        File::open(input)
            .and_then(|mut file| file.read_to_end(&mut buffer))
            .with_context(|| format!("Failed to read software records from '{}'", input))?;
    }
    Ok(buffer)
}

/// Report the active configuration; call after `init_tracing`
fn announce_config(path: Option<&Path>, config: &OverviewConfig) {
    let path = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<default>".to_string());

    ConfigLoaded {
        path: &path,
        template_path: config.template.path.as_deref(),
        log_level: &config.log_level,
    }
    .log();
}

fn write_output(output: Option<&Path>, page: &[u8]) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path).with_context(|| {
                format!("Failed to create output file '{}'", path.display())
            })?;
            let mut writer = BufWriter::new(file);
            writer
                .write_all(page)
                .and_then(|_| writer.flush())
                .with_context(|| format!("Failed to write output file '{}'", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(page)
                .and_then(|_| stdout.flush())
                .context("Failed to write overview to stdout")
        }
    }
}

fn run(args: &CliArgs, config: &OverviewConfig) -> Result<()> {
    let template = OverviewTemplate::from_config(&config.template)
        .context("Cannot start without an overview template")?;
    let renderer = TemplateRenderer::new(template);

    let input = read_input(&args.input)?;

    // Render in memory so a failed render never touches an existing page
    let mut page = Vec::new();
    if let Err(e) = renderer.render(&input, &mut page) {
        RenderFailed {
            template_name: renderer.name(),
            error: &e,
        }
        .log();
        return Err(e).context("Failed to render overview");
    }

    write_output(args.output.as_deref(), &page)
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("codemeta-overview");

    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(msg) => {
            eprintln!("{}\n{}", msg, usage(program));
            return ExitCode::from(2);
        }
    };

    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => OverviewConfig::default(),
    };

    init_tracing(&config);
    announce_config(cli.config.as_deref(), &config);

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_input_only() {
        let cli = parse_args(&args(&["prog", "software.json"])).unwrap();
        assert_eq!(
            cli,
            CliArgs {
                config: None,
                input: "software.json".to_string(),
                output: None,
            }
        );
    }

    #[test]
    fn test_parse_config_input_and_output() {
        let cli = parse_args(&args(&[
            "prog",
            "--config",
            "configs/overview.yaml",
            "-",
            "out.html",
        ]))
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("configs/overview.yaml")));
        assert_eq!(cli.input, STDIN_MARKER);
        assert_eq!(cli.output, Some(PathBuf::from("out.html")));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&["prog"])).is_err());
        assert!(parse_args(&args(&["prog", "in.json", "--config"])).is_err());
        assert!(parse_args(&args(&["prog", "a", "b", "c"])).is_err());
    }

    #[test]
    fn test_run_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("overview.html");
        let cli = CliArgs {
            config: None,
            input: "fixtures/software.json".to_string(),
            output: Some(output.clone()),
        };

        run(&cli, &OverviewConfig::default()).unwrap();

        let html = std::fs::read_to_string(&output).unwrap();
        assert!(html.contains(r#"<a href="xenon">Xenon</a>"#));
    }

    #[test]
    fn test_run_reports_decode_failure() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bad.json");
        std::fs::write(&input, "not json").unwrap();
        let output = dir.path().join("overview.html");
        std::fs::write(&output, "<html>previous page</html>").unwrap();
        let cli = CliArgs {
            config: None,
            input: input.to_string_lossy().into_owned(),
            output: Some(output.clone()),
        };

        let err = run(&cli, &OverviewConfig::default()).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid software input"));

        // Existing page is left alone
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "<html>previous page</html>"
        );
    }

    #[test]
    fn test_run_render_failure_keeps_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("broken.html");
        std::fs::write(&template, "{{ missing }}").unwrap();
        let output = dir.path().join("overview.html");
        std::fs::write(&output, "<html>previous page</html>").unwrap();

        let mut config = OverviewConfig::default();
        config.template.path = Some(template);
        let cli = CliArgs {
            config: None,
            input: "fixtures/software.json".to_string(),
            output: Some(output.clone()),
        };

        let err = run(&cli, &config).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to render overview"));
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "<html>previous page</html>"
        );
    }

    /// Shared buffer the fmt subscriber writes into
    #[derive(Clone, Default)]
    struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_announce_config_reaches_subscriber() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let config = load_config("configs/overview.yaml").unwrap();
        tracing::subscriber::with_default(subscriber, || {
            announce_config(Some(Path::new("configs/overview.yaml")), &config);
        });

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains(
            "Loaded config 'configs/overview.yaml': template=templates/overview.html, log_level=info"
        ));
    }
}
