//! Full-Window Prompt Screens
//!
//! The start menu and the death screen are the same thing with different
//! data: a message centered on black that waits for ENTER or a window close.
//!
//! - [`layout`] - centered placement of the text bitmap
//! - [`screen`] - the state machine and the render/poll loop
//!
//! # Example Usage
//!
//! ```ignore
//! let mut gfx = GraphicsContext::init()?;
//! let config = ScreensConfig::load()?;
//!
//! if run_screen(&mut gfx, &config, &config.menu)? == Flow::Exit {
//!     return Ok(());
//! }
//! ```

pub mod layout;
pub mod screen;

pub use screen::{Flow, run_screen};
