use anyhow::Context;
use robo_global::configuration::get_configuration;
use robo_global::startup::build;
use robo_global::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("robo_global".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = get_configuration().context("Failed to read configuration.")?;
    let app = build(config).context("Failed to bind the API port.")?;
    tracing::info!("API listening on port {}", app.port());
    app.run().await?;

    Ok(())
}
