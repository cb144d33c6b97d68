use std::path::PathBuf;

use clap::Parser;

use fsel::app::App;
use fsel::config::{Config, ThemeVariant};
use fsel::error::{AppError, AppResult};

#[derive(Debug, Parser)]
#[command(name = "fsel", about = "Filterable multi-select fruit picker for the terminal")]
struct Cli {
    /// Theme variant: "default" or "compact". Overrides the config file.
    #[arg(long)]
    theme: Option<String>,
    /// Config file path. Defaults to $FSEL_CONFIG_PATH, then
    /// $XDG_CONFIG_HOME/fsel/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    if let Some(theme) = cli.theme.as_deref() {
        config.theme.variant = parse_theme_arg(theme)?.id().to_string();
    }

    App::with_config(config).run()
}

fn parse_theme_arg(value: &str) -> AppResult<ThemeVariant> {
    ThemeVariant::parse(value).ok_or_else(|| {
        AppError::invalid_argument(format!(
            "unknown theme: {value} (expected \"default\" or \"compact\")"
        ))
    })
}
