use airwatch::app::AppCore;
use airwatch::gateway::GatewayConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("airwatch starting up...");

    let profile_path = std::env::temp_dir().join("airwatch-profile.json");
    let core = AppCore::new(GatewayConfig::default(), profile_path)?;

    if let Some(profile) = core.current_profile() {
        log::info!("restored session for {}", profile.username);
    }

    let view = core.load_dashboard().await;
    println!(
        "{} — AQI {} ({})",
        view.reading.station, view.reading.aqi, view.classification.label
    );
    println!("Dominant pollutant: {}", view.reading.dominant_pollutant);
    if let Some(alert) = view.alert {
        println!("{}: {}", alert.title(), alert.message());
    }
    for item in view.classification.health_advice {
        println!("  - {item}");
    }

    Ok(())
}
