use clap::Parser;
use hydromap::cli::{run, Cli};
use hydromap::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
