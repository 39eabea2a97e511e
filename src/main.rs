mod application;
mod cli;
mod commands;
mod config;
mod env;
mod error;
mod fs;
mod index;
mod mime_type;
mod output;
mod record;
mod registry;
mod resource;
mod sniffer;

use clap::error::ErrorKind;
use clap::Parser;

fn main() {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            // 引数なし・不明なコマンドは使い方を標準出力に出して終了コード 1
            _ => {
                println!("{err}");
                std::process::exit(1);
            }
        },
    };

    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: cli::Cli) -> Result<(), String> {
    let settings = config::Settings::load(&cli.overrides()).map_err(|e| e.to_string())?;
    let ctx = commands::Context::from_settings(&settings);
    commands::dispatch(cli.command, &ctx)
}

/// `RUST_LOG` が設定されていればそちらを優先する
fn init_tracing(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mime={level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
