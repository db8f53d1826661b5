//! TrueType Text Rendering
//!
//! Renders a message once into a texture so the screen loop only has to
//! copy it each frame.

use crate::error::ScreenError;
use sdl2::pixels::Color;
use sdl2::render::{Texture, TextureCreator};
use sdl2::ttf::Sdl2TtfContext;
use sdl2::video::WindowContext;
use std::path::Path;

/// An antialiased, pre-rendered line of text
pub struct TextBitmap<'a> {
    pub texture: Texture<'a>,
    pub width: u32,
    pub height: u32,
}

impl<'a> TextBitmap<'a> {
    /// Load `font_path` at `point_size` and render `text` in `color`
    ///
    /// # Errors
    ///
    /// - `ScreenError::Font` if the font can't be opened or the text can't be rendered
    /// - `ScreenError::Sdl` if the texture upload fails
    pub fn render(
        ttf: &Sdl2TtfContext,
        texture_creator: &'a TextureCreator<WindowContext>,
        font_path: &Path,
        point_size: u16,
        text: &str,
        color: Color,
    ) -> Result<Self, ScreenError> {
        let font_error = |message: String| ScreenError::Font {
            path: font_path.to_path_buf(),
            message,
        };

        let font = ttf.load_font(font_path, point_size).map_err(font_error)?;

        // blended = antialiased against a transparent background
        let surface = font
            .render(text)
            .blended(color)
            .map_err(|e| font_error(e.to_string()))?;

        let texture = texture_creator
            .create_texture_from_surface(&surface)
            .map_err(|e| ScreenError::Sdl(e.to_string()))?;

        let query = texture.query();
        log::debug!(
            "Rendered '{}' with {} at {}pt: {}x{}",
            text,
            font_path.display(),
            point_size,
            query.width,
            query.height
        );

        Ok(TextBitmap {
            texture,
            width: query.width,
            height: query.height,
        })
    }
}
