//! Drawing surfaces
//!
//! [`Surface`] is the minimal drawing contract the session renders through.
//! [`Canvas`] is the software implementation: an RGBA8 pixel buffer that
//! keeps everything drawn on it until it is filled again.

use crate::color::Color;
use crate::geometry::Rect;

/// Error presenting a frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The presentation target was lost and could not be recovered
    Lost,
    /// Out of memory while presenting
    OutOfMemory,
    /// Other backend error
    Other(String),
}

impl std::fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurfaceError::Lost => write!(f, "Surface lost"),
            SurfaceError::OutOfMemory => write!(f, "Out of memory"),
            SurfaceError::Other(msg) => write!(f, "Surface error: {}", msg),
        }
    }
}

impl std::error::Error for SurfaceError {}

/// Something the session can draw onto and show
pub trait Surface {
    /// Drawable size in pixels `(width, height)`
    fn size(&self) -> (u32, u32);
    /// Fill the whole surface with one color
    fn fill(&mut self, color: Color);
    /// Fill a rectangle, clipped to the surface
    fn draw_rect(&mut self, color: Color, rect: Rect);
    /// Make everything drawn so far visible
    fn present(&mut self) -> Result<(), SurfaceError>;
}

/// Software RGBA8 canvas
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    presented: u64,
}

impl Canvas {
    /// Create a transparent black canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
            presented: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw pixel bytes, row-major RGBA
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Color at `(x, y)`, or `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.index(x, y);
        let p = &self.pixels[idx..idx + 4];
        Some(Color { r: p[0], g: p[1], b: p[2], a: p[3] })
    }

    /// Number of times [`Surface::present`] has been called
    pub fn presented_frames(&self) -> u64 {
        self.presented
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }
}

impl Surface for Canvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill(&mut self, color: Color) {
        let rgba = color.to_rgba();
        for pixel in self.pixels.chunks_exact_mut(4) {
            pixel.copy_from_slice(&rgba);
        }
    }

    fn draw_rect(&mut self, color: Color, rect: Rect) {
        let Some((x0, y0, x1, y1)) = rect.clip(self.width, self.height) else {
            return;
        };
        let rgba = color.to_rgba();
        for y in y0..y1 {
            let start = self.index(x0, y);
            let end = self.index(x1, y);
            for pixel in self.pixels[start..end].chunks_exact_mut(4) {
                pixel.copy_from_slice(&rgba);
            }
        }
    }

    fn present(&mut self) -> Result<(), SurfaceError> {
        self.presented += 1;
        Ok(())
    }
}
