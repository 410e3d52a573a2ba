use clap::Parser;
use polarplot::cli::{run, Cli};
use polarplot::init_logging;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    run(&cli, &mut stdout.lock())?;

    Ok(())
}
