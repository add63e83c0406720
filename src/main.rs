use log::LevelFilter;

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .with_colors(true)
        .with_threads(true)
        .with_local_timestamps()
        .init()?;

    let channels = moodtrack_bridge::BridgeChannels::default();
    let backend = moodtrack_backend::run(channels.backend_rx, channels.backend_tx);
    moodtrack_frontend::run(channels.frontend_rx, channels.frontend_tx)?;

    // the frontend dropped its sender, which stops the backend loop
    if backend.join().is_err() {
        log::error!("Backend thread panicked");
    }
    Ok(())
}
