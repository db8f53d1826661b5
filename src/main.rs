mod config;
mod context;
mod error;
mod gui;
mod input_system;
mod text;

use config::ScreensConfig;
use context::GraphicsContext;
use error::ScreenError;
use gui::{Flow, run_screen};

/// Menu, then (once gameplay exists) the death screen
///
/// Both screens share one SDL context. Any `Flow::Exit` ends the sequence;
/// the context is dropped on the way out, which shuts SDL down.
fn run() -> Result<(), ScreenError> {
    let config = ScreensConfig::load()?;
    let mut gfx = GraphicsContext::init()?;

    if run_screen(&mut gfx, &config, &config.menu)? == Flow::Exit {
        log::info!("Window closed on the menu");
        return Ok(());
    }

    // Gameplay slots in here; the player always dies eventually
    run_screen(&mut gfx, &config, &config.ending)?;

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let code = match run() {
        Ok(()) => 0,
        Err(e) => {
            log::error!("{}", e);
            1
        }
    };

    std::process::exit(code);
}
