use clap::Parser;
use meetconf_cli::Args;

fn main() -> Result<(), anyhow::Error> {
    meetconf_cli::run(Args::parse())
}
