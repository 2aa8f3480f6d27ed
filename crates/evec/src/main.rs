use clap::Parser;
use evec::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    evec::init_logger!();

    let cli = Cli::parse();
    let value = cli.op.evaluate()?;
    println!("{}", cli::render(&value, cli.precision));
    Ok(())
}
