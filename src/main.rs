use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    daypage_core::init()?;

    let (config, _validation) = match daypage_core::Config::load_validated() {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!(user_message = %e.user_message(), "Failed to load config: {}", e);
            return Err(e.into());
        }
    };

    tracing::info!(
        "Weather for {} ({}, {})",
        config.weather.location_name,
        config.weather.latitude,
        config.weather.longitude
    );

    if let Err(e) = daypage_web::serve(&config).await {
        tracing::error!(user_message = %e.user_message(), "Server failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
