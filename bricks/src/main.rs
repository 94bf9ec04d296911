mod array;
mod distance;
mod list;
mod parse;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an array from values and print it.
    Array(array::ArrayCommand),
    /// Compute the distance between two vectors.
    Distance(distance::Distance),
    /// Fill a linked list and print its chain, minimum and maximum.
    List(list::List),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Array(array) => {
            array.run()?;
        }
        Commands::Distance(distance) => {
            distance.run()?;
        }
        Commands::List(list) => {
            list.run()?;
        }
    }
    Ok(())
}
