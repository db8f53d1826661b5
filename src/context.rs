//! Process-wide SDL handle
//!
//! SDL refuses a second `sdl2::init()` while the first context is alive, and
//! only one `EventPump` may exist at a time. `GraphicsContext` owns all of
//! that once; screens borrow it and open their own windows. Dropping it
//! shuts SDL_ttf and SDL down.

use crate::error::ScreenError;
use sdl2::render::Canvas;
use sdl2::ttf::Sdl2TtfContext;
use sdl2::video::Window;
use sdl2::{EventPump, Sdl, VideoSubsystem};

pub struct GraphicsContext {
    // Field order is drop order: fonts and pump go before the SDL core
    pub ttf: Sdl2TtfContext,
    pub event_pump: EventPump,
    video: VideoSubsystem,
    _sdl: Sdl,
}

impl GraphicsContext {
    /// Bring up SDL video, the event queue and SDL_ttf
    pub fn init() -> Result<Self, ScreenError> {
        let sdl = sdl2::init()?;
        let video = sdl.video()?;
        let event_pump = sdl.event_pump()?;
        let ttf = sdl2::ttf::init().map_err(|e| ScreenError::Sdl(e.to_string()))?;

        log::debug!("SDL initialized (video driver: {})", video.current_video_driver());

        Ok(GraphicsContext {
            ttf,
            event_pump,
            video,
            _sdl: sdl,
        })
    }

    /// Open a fixed-size, centered window and wrap it in a canvas
    pub fn open_window(&self, title: &str, width: u32, height: u32) -> Result<Canvas<Window>, ScreenError> {
        let window = self
            .video
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

        log::debug!("Opened window '{}' ({}x{})", title, width, height);
        Ok(canvas)
    }
}
