use anyhow::Result;
use manatury::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
