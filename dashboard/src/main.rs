use clap::Parser;
use dashboard::{Cli, setup_environment};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = setup_environment();

    let stdout = std::io::stdout();
    if let Err(e) = cli.run(&config, &mut stdout.lock()) {
        tracing::error!("Dashboard error: {:#}", e);
        return Err(e);
    }

    Ok(())
}
