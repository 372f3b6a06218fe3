mod commands;
mod error;
use argh::FromArgs;
use core::error::Error;

#[derive(FromArgs, Debug)]
/// Writes raw sample files as DDS textures and inspects half float encodings
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Write(commands::write::WriteCmd),
    Half(commands::half::HalfCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::builder()
        .filter_module(env!("CARGO_CRATE_NAME"), log::LevelFilter::Info)
        .filter_module("lwdds_dds", log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli: TopLevel = argh::from_env();

    match cli.command {
        Commands::Write(cmd) => {
            commands::write::handle_write_command(cmd)?;
        }
        Commands::Half(cmd) => {
            commands::half::handle_half_command(cmd)?;
        }
    }

    Ok(())
}
