//! The brush: a colored rectangle steered by key bindings
//!
//! Controls (defaults):
//! - Arrow keys: move up/down/left/right, diagonals allowed
//! - B/G/R/Y: blue/green/red/yellow
//! - Space: black
//!
//! The brush moves a fixed number of pixels per frame. Wall handling is a
//! velocity clamp run before every move: motion that would take the brush
//! further outside the canvas is stopped, but a brush already outside is
//! never pushed back in.

use crate::bindings::{Axis, MovementBindings, Palette};
use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::key::Key;
use crate::surface::Surface;

/// Pixels per frame for a held movement key
pub const DEFAULT_SPEED: i32 = 4;

/// Velocity in pixels per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Velocity {
    pub x: i32,
    pub y: i32,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut i32 {
        match axis {
            Axis::Horizontal => &mut self.x,
            Axis::Vertical => &mut self.y,
        }
    }

    fn axis(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

/// Construction parameters for a [`Brush`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrushSettings {
    pub width: u32,
    pub height: u32,
    pub speed: i32,
    pub initial_color: Color,
    pub movement: MovementBindings,
    pub palette: Palette,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            speed: DEFAULT_SPEED,
            initial_color: Color::RED,
            movement: MovementBindings::default(),
            palette: Palette::default(),
        }
    }
}

/// The user-controlled rectangle
#[derive(Debug, Clone)]
pub struct Brush {
    position: Point,
    width: u32,
    height: u32,
    velocity: Velocity,
    speed: i32,
    color: Color,
    movement: MovementBindings,
    palette: Palette,
}

impl Brush {
    /// Create a stationary brush with its top-left corner at `position`
    pub fn new(settings: BrushSettings, position: Point) -> Self {
        Self {
            position,
            width: settings.width,
            height: settings.height,
            velocity: Velocity::ZERO,
            speed: settings.speed,
            color: settings.initial_color,
            movement: settings.movement,
            palette: settings.palette,
        }
    }

    /// Create a stationary brush near the canvas center
    ///
    /// The top-left corner sits one full brush size up and left of the
    /// center, so a 10x10 brush on a 500x400 canvas starts at (240, 190).
    pub fn centered(settings: BrushSettings, canvas_width: u32, canvas_height: u32) -> Self {
        let x = (canvas_width / 2) as i32 - settings.width as i32;
        let y = (canvas_height / 2) as i32 - settings.height as i32;
        Self::new(settings, Point::new(x, y))
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Place the brush, keeping its velocity
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Velocity) {
        self.velocity = velocity;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    /// Current rectangle
    pub fn rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.width, self.height)
    }

    pub fn is_movement_key(&self, key: Key) -> bool {
        self.movement.contains(key)
    }

    pub fn is_color_key(&self, key: Key) -> bool {
        self.palette.contains(key)
    }

    /// Apply one frame of velocity
    ///
    /// No bounds check happens here; call [`Brush::clamp_to_bounds`] first.
    pub fn advance(&mut self) {
        self.position.x += self.velocity.x;
        self.position.y += self.velocity.y;
    }

    /// Stop motion that would push the brush further out of the canvas
    pub fn clamp_to_bounds(&mut self, canvas_width: u32, canvas_height: u32) {
        let rect = self.rect();
        let axes = [
            (Axis::Horizontal, rect.left(), rect.right(), canvas_width as i32),
            (Axis::Vertical, rect.top(), rect.bottom(), canvas_height as i32),
        ];

        for (axis, low, high, extent) in axes {
            let v = self.velocity.axis_mut(axis);
            if low < 0 && *v < 0 {
                *v = 0;
            } else if high > extent && *v > 0 {
                *v = 0;
            }
        }
    }

    /// Start moving in the direction bound to `key`
    ///
    /// Only the key's axis is overwritten, so holding a horizontal and a
    /// vertical key moves diagonally. Returns whether the key was bound.
    pub fn on_key_down_movement(&mut self, key: Key) -> bool {
        let Some(direction) = self.movement.direction(key) else {
            return false;
        };
        *self.velocity.axis_mut(direction.axis()) = direction.sign() * self.speed;
        true
    }

    /// Stop moving on the released key's axis, if that key is driving it
    ///
    /// Releasing a key whose direction was already overridden by the opposite
    /// key leaves the current motion alone.
    pub fn on_key_up_movement(&mut self, key: Key) -> bool {
        let Some(direction) = self.movement.direction(key) else {
            return false;
        };
        let axis = direction.axis();
        if self.velocity.axis(axis).signum() == direction.sign() {
            *self.velocity.axis_mut(axis) = 0;
            return true;
        }
        false
    }

    /// Switch to the palette color bound to `key`
    ///
    /// Returns the new color, or `None` for unbound keys.
    pub fn on_key_down_color(&mut self, key: Key) -> Option<Color> {
        let color = self.palette.color_for(key)?;
        self.color = color;
        Some(color)
    }

    /// Paint the brush onto `surface`
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.draw_rect(self.color, self.rect());
    }
}
