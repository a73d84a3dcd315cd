use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use notify_icon::error::IconError;
use notify_icon::services::{ConvertOptions, IconConverter};

#[derive(Parser)]
#[command(name = "notify-icon")]
#[command(about = "Turn an app logo into a white, alpha-masked notification icon")]
struct Cli {
    /// Source PNG (near-white subject on a colored background)
    #[arg(short, long, default_value = "app/src/main/res/drawable/logo_svgrepo_com_1.png")]
    input: PathBuf,

    /// Output PNG path (overwritten if it exists)
    #[arg(short, long, default_value = "app/src/main/res/drawable/ic_notification.png")]
    output: PathBuf,

    /// Re-compress the output with oxipng
    #[arg(long)]
    optimize: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notify_icon=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let converter = IconConverter::new(ConvertOptions {
        optimize: cli.optimize,
    });

    match converter.convert(&cli.input, &cli.output) {
        Ok(_) => {
            println!(
                "Successfully created monochrome icon at {}",
                cli.output.display()
            );
            Ok(())
        }
        Err(e @ IconError::InputNotFound(_)) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
