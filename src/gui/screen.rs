//! Prompt Screen Loop
//!
//! Clears to black, copies the pre-rendered message, drains input and
//! presents, until ENTER or a window close.
//!
//! The loop itself ([`drive`]) only talks to a [`ScreenBackend`], so the
//! control flow can be exercised without a display. [`run_screen`] wires it
//! to SDL.

use super::layout::centered_rect;
use crate::config::{ConfirmPolicy, ScreenConfig, ScreensConfig};
use crate::context::GraphicsContext;
use crate::error::ScreenError;
use crate::input_system::{InputSystem, ScreenAction};
use crate::text::TextBitmap;
use sdl2::EventPump;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::time::Duration;

const BACKGROUND: Color = Color::RGB(0, 0, 0);

/// Where a screen is in its lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    /// Showing the prompt, waiting for input
    Waiting,
    /// ENTER was pressed; the screen ends after this frame
    Confirmed,
    /// The window was closed; the screen ends immediately
    Closed,
}

impl ScreenState {
    /// Apply one action
    ///
    /// A close always wins, even after ENTER in the same batch of events.
    /// Nothing leads back to `Waiting`.
    pub fn handle(self, action: ScreenAction) -> ScreenState {
        match (self, action) {
            (_, ScreenAction::Close) => ScreenState::Closed,
            (ScreenState::Waiting, ScreenAction::Confirm) => ScreenState::Confirmed,
            (state, ScreenAction::Confirm) => state,
        }
    }
}

/// How a screen ended, as seen by its caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Carry on with the game
    Proceed,
    /// Stop the program
    Exit,
}

impl Flow {
    fn from_state(state: ScreenState, policy: ConfirmPolicy) -> Flow {
        match (state, policy) {
            (ScreenState::Confirmed, ConfirmPolicy::ReturnToCaller) => Flow::Proceed,
            _ => Flow::Exit,
        }
    }
}

/// Drawing and input primitives the loop needs
pub trait ScreenBackend {
    /// Fill with `background` and copy the text bitmap to `text_rect`
    fn draw(&mut self, background: Color, text_rect: Rect) -> Result<(), ScreenError>;

    /// Drain all pending input, in order
    fn poll_actions(&mut self) -> Vec<ScreenAction>;

    /// Show the frame and wait for the next one
    fn present(&mut self);
}

/// Run the prompt loop until ENTER or close
///
/// Returns the terminal state, never `Waiting`. On close the current frame
/// is abandoned before presenting.
pub fn drive<B: ScreenBackend>(backend: &mut B, text_rect: Rect) -> Result<ScreenState, ScreenError> {
    let mut state = ScreenState::Waiting;

    loop {
        backend.draw(BACKGROUND, text_rect)?;

        for action in backend.poll_actions() {
            state = state.handle(action);
        }

        if state == ScreenState::Closed {
            return Ok(state);
        }

        backend.present();

        if state == ScreenState::Confirmed {
            return Ok(state);
        }
    }
}

/// SDL implementation of [`ScreenBackend`]
pub struct SdlBackend<'a> {
    canvas: &'a mut Canvas<Window>,
    event_pump: &'a mut EventPump,
    bitmap: &'a TextBitmap<'a>,
    input: InputSystem,
    frame_delay: Duration,
}

impl ScreenBackend for SdlBackend<'_> {
    fn draw(&mut self, background: Color, text_rect: Rect) -> Result<(), ScreenError> {
        self.canvas.set_draw_color(background);
        self.canvas.clear();
        self.canvas.copy(&self.bitmap.texture, None, Some(text_rect))?;
        Ok(())
    }

    fn poll_actions(&mut self) -> Vec<ScreenAction> {
        self.input.poll_actions(self.event_pump)
    }

    fn present(&mut self) {
        self.canvas.present();

        // Cap framerate
        std::thread::sleep(self.frame_delay);
    }
}

/// Show one prompt screen
///
/// Opens a `window_width` x `window_height` window titled after the screen,
/// renders the message once and loops until the user answers. The window is
/// closed again when this returns; `gfx` stays up for the next screen.
pub fn run_screen(
    gfx: &mut GraphicsContext,
    window: &ScreensConfig,
    screen: &ScreenConfig,
) -> Result<Flow, ScreenError> {
    log::info!("Showing '{}' screen", screen.title);

    let mut canvas = gfx.open_window(&screen.title, window.window_width, window.window_height)?;
    let texture_creator = canvas.texture_creator();

    let bitmap = TextBitmap::render(
        &gfx.ttf,
        &texture_creator,
        &screen.font_path,
        screen.font_size,
        &screen.message,
        screen.color(),
    )?;
    let text_rect = centered_rect(window.window_width, window.window_height, bitmap.width, bitmap.height);
    log::debug!("Text placed at {:?}", text_rect);

    let mut backend = SdlBackend {
        canvas: &mut canvas,
        event_pump: &mut gfx.event_pump,
        bitmap: &bitmap,
        input: InputSystem::new(),
        frame_delay: window.frame_delay(),
    };

    let state = drive(&mut backend, text_rect)?;
    let flow = Flow::from_state(state, screen.on_confirm);

    log::info!("'{}' screen ended: {:?} -> {:?}", screen.title, state, flow);
    Ok(flow)
}
