use anyhow::Result;
use logmaint::cli::start;

#[tokio::main]
async fn main() -> Result<()> {
    start().await
}
