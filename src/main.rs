//! Paintbrush - steer a brush with the arrow keys and leave a trail

use paintbrush::config::AppConfig;
use paintbrush::session::Session;
use paintbrush::systems::{FrameClock, WinitEventSource};
use paintbrush_input::KeyMapper;
use paintbrush_render::WindowSurface;

fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mapper = KeyMapper::new().with_quit_key(config.input.quit_key);
    let mut events = WinitEventSource::new(config.window.clone(), mapper)?;
    let window = events.open_window()?;

    let surface = WindowSurface::new(
        window,
        config.window.width,
        config.window.height,
        config.window.vsync,
    )?;

    let mut session = Session::initialize(
        config.to_session_settings(),
        config.to_brush_settings(),
        surface,
    );
    let mut clock = FrameClock::new();
    session.run(&mut events, &mut clock)?;
    Ok(())
}

fn main() {
    // Load configuration before logging so its log level can apply
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Err(e) = &loaded {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting Paintbrush");

    if let Err(e) = run(config) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
