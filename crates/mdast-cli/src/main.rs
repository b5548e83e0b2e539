use anyhow::{Context, Result};
use mdast_config::Config;
use mdast_engine::Root;
use std::env;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

/// Where the Markdown comes from.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    fn from_args(args: &[String]) -> Option<Self> {
        match args {
            [] | [_] => Some(Input::Stdin),
            [_, path] if path == "-" => Some(Input::Stdin),
            [_, path] => Some(Input::File(PathBuf::from(path))),
            _ => None,
        }
    }

    fn read(&self) -> Result<String> {
        match self {
            Input::Stdin => {
                let mut content = String::new();
                io::stdin()
                    .read_to_string(&mut content)
                    .context("Failed to read stdin")?;
                Ok(content)
            }
            Input::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read '{}'", path.display())),
        }
    }
}

fn render(root: &Root, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(root)?
    } else {
        serde_json::to_string(root)?
    };
    Ok(json)
}

fn program_name(args: &[String]) -> &str {
    args.first().map_or("mdast-cli", String::as_str)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(input) = Input::from_args(&args) else {
        eprintln!("Usage: {} [FILE]", program_name(&args));
        eprintln!("Reads stdin when FILE is omitted or '-'");
        process::exit(1);
    };

    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(Some(config)) => {
            log::info!("Using config from {}", config_path.display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let source = input.read()?;
    let root = config.engine().parse(&source);
    log::debug!("Parsed {} block(s)", root.len());

    let json = render(&root, config.pretty)?;
    match &config.output_path {
        Some(path) => std::fs::write(path, json + "\n")
            .with_context(|| format!("Failed to write '{}'", path.display()))?,
        None => writeln!(io::stdout().lock(), "{json}")?,
    }

    Ok(())
}
