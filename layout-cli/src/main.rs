use layout_core::{LayoutConfig, generate_level};

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, long_about = None)]
struct Args {
    #[command(flatten)]
    config: LayoutConfig,

    /// Seed for a reproducible level
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log every generation step
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let level = generate_level(&args.config, args.seed)?;

    if (level.rooms().len() as u32) < args.config.max_rooms {
        tracing::info!(
            "Stopped short with {} of {} rooms",
            level.rooms().len(),
            args.config.max_rooms
        );
    }

    print!("{}", level);

    Ok(())
}
