//! Screen-space placement helpers

use sdl2::rect::{Point, Rect};

/// Rectangle of exactly `width` x `height` centered in a `bounds_width` x
/// `bounds_height` area
///
/// Content larger than the bounds gets negative coordinates and is clipped
/// by SDL when drawn.
pub fn centered_rect(bounds_width: u32, bounds_height: u32, width: u32, height: u32) -> Rect {
    let center = Point::new((bounds_width / 2) as i32, (bounds_height / 2) as i32);
    Rect::from_center(center, width, height)
}
