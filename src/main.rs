use actix_web::{App, HttpServer};
use anyhow::Context;
use jewelbill::config::{Config, LogFormat};
use jewelbill::middleware::RequestId;
use jewelbill::pricing::PriceCalculator;
use jewelbill::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    init_tracing(&config);

    tracing::info!("Starting jewellery billing service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Open the local store; without it there is nothing to bill against
    let pool = config
        .database
        .connect_and_migrate()
        .await
        .with_context(|| format!("Failed to open store at {}", config.database.url))?;

    tracing::info!("Store ready at {}", config.database.url);

    let calculator = PriceCalculator::with_wastage_rate(config.pricing.wastage_rate())
        .context("Invalid wastage rate")?;
    tracing::info!("Wastage rate: {}%", config.pricing.wastage_percent);

    let state = AppState::new(pool, calculator);

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(RequestId)
            .configure(|cfg| state.configure(cfg))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated with an error")
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("jewelbill={},actix_web=info", config.app.log_level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    match config.app.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
