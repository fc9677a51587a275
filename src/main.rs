use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use srinfo::{Lookup, MihomoClient, cli};

#[tokio::main]
async fn main() {
    dotenv().ok();
    // stdout only carries the prompt and the result line
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = start().await {
        tracing::error!("srinfo: {err:#}");
    }
}

async fn start() -> anyhow::Result<()> {
    let client = match MihomoClient::new() {
        Ok(client) => client,
        Err(err) => {
            println!("{}", Lookup::from(err));
            return Ok(());
        }
    };
    tracing::debug!("using base url {}", client.base_url());

    let uid_arg = std::env::args().nth(1);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    cli::run(&client, uid_arg, stdin.lock(), &mut stdout).await?;
    Ok(())
}
