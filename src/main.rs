use agriverse_api::{parse_server_address, assistant::Assistant, AssistantConfig, Server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; variables may come from the real environment.
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let addr = parse_server_address()?;
    let assistant = Assistant::from_config(&AssistantConfig::from_env());

    let server = Server::new(addr, assistant);
    server.run().await?;

    Ok(())
}
