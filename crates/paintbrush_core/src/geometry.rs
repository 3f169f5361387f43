//! Integer screen-space geometry

/// A point in canvas pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    /// One past the last column (`left + width`)
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    /// One past the last row (`top + height`)
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Intersection with the canvas `[0, width) × [0, height)`
    ///
    /// Returns `(x0, y0, x1, y1)` with exclusive upper bounds, or `None` if
    /// nothing of the rectangle is visible.
    pub fn clip(&self, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
        let x0 = self.left().max(0);
        let y0 = self.top().max(0);
        let x1 = self.right().min(width as i32);
        let y1 = self.bottom().min(height as i32);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let rect = Rect::new(240, 190, 10, 10);
        assert_eq!(rect.left(), 240);
        assert_eq!(rect.right(), 250);
        assert_eq!(rect.top(), 190);
        assert_eq!(rect.bottom(), 200);
    }

    #[test]
    fn test_clip_inside() {
        assert_eq!(Rect::new(2, 3, 4, 5).clip(20, 20), Some((2, 3, 6, 8)));
    }

    #[test]
    fn test_clip_partially_outside() {
        assert_eq!(Rect::new(-3, 18, 10, 10).clip(20, 20), Some((0, 18, 7, 20)));
    }

    #[test]
    fn test_clip_fully_outside() {
        assert_eq!(Rect::new(-10, 0, 10, 10).clip(20, 20), None);
        assert_eq!(Rect::new(20, 0, 10, 10).clip(20, 20), None);
    }
}
