use report_server::{Server, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. .env, configuration, logging
    let config = setup_environment()?;

    print_banner();
    tracing::info!(
        environment = %config.environment,
        timezone = %config.timezone,
        "Report server starting..."
    );

    // 2. Data source, report service, HTTP server
    let server = Server::new(config);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
