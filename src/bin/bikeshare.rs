use anyhow::Result;
use bikeshare_rs::Registry;
use bikeshare_rs::interrupt::Interrupt;
use bikeshare_rs::prompt::Console;
use bikeshare_rs::session;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bikeshare",
    version,
    about = "Interactively explore US bikeshare trip data"
)]
struct Cli {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let registry = Registry::new(&cli.data_dir);
    let interrupt = Interrupt::install()?;
    let mut console = Console::stdio();
    session::run(&mut console, &registry, &interrupt)
}
