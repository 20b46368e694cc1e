//! GSL CLI - Command line tool for the Great Salt Lake bird migration story.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gsl-cli",
    version,
    about = "Great Salt Lake bird migration data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: gsl_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    gsl_cmd::run(cli.command).await
}
