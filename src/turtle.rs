//! Turtle state and operations for line-art interpretation.

use crate::math::{Axis, rotation};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Width multiplier applied by `!` and `>`.
pub const WIDTH_SHRINK: f32 = 0.7;

/// Width multiplier applied by `<`.
pub const WIDTH_GROW: f32 = 1.4;

/// Pen color of a freshly reset turtle (leaf green).
pub const DEFAULT_COLOR: Vec3 = Vec3::new(0.2, 0.8, 0.2);

/// The state of the drawing turtle.
///
/// Tracks position and the heading/left/up orientation frame along with the
/// current pen. The frame is never re-orthonormalized, so long strings of
/// rotations may drift slightly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current world-space position of the pen.
    pub position: Vec3,

    /// Direction of travel.
    pub heading: Vec3,

    pub left: Vec3,

    pub up: Vec3,

    /// Current line width. Never negative as long as the configured factors are not.
    pub width: f32,

    /// Current pen color, RGB in `[0, 1]`.
    pub color: Vec3,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            heading: Vec3::Y,
            left: Vec3::NEG_X,
            up: Vec3::Z,
            width: 1.0,
            color: DEFAULT_COLOR,
        }
    }
}

impl TurtleState {
    /// The point `distance` ahead of the turtle along its heading.
    pub fn ahead(&self, distance: f32) -> Vec3 {
        self.position + self.heading * distance
    }

    /// Yaw: rotates heading and left about the Z (up) axis by `angle` radians.
    pub fn turn(&mut self, angle: f32) {
        let rot = rotation(Axis::Z, angle);
        self.heading = rot * self.heading;
        self.left = rot * self.left;
    }

    /// Pitch: rotates heading and up about the X (left) axis by `angle` radians.
    pub fn pitch(&mut self, angle: f32) {
        let rot = rotation(Axis::X, angle);
        self.heading = rot * self.heading;
        self.up = rot * self.up;
    }

    /// Roll: rotates left and up about the Y (heading) axis by `angle` radians.
    pub fn roll(&mut self, angle: f32) {
        let rot = rotation(Axis::Y, angle);
        self.left = rot * self.left;
        self.up = rot * self.up;
    }

    /// Reverses heading and left in place.
    pub fn turn_around(&mut self) {
        self.heading = -self.heading;
        self.left = -self.left;
    }
}

/// Operations that can be performed by the turtle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TurtleOp {
    // --- Drawing ---
    /// Draw a segment forward (`F`, `A`, `B`).
    Draw,
    /// Move forward without drawing (`f`).
    Move,

    // --- Orientation ---
    /// Rotate around up (`+`/`-`). The payload is the sign of the turn.
    Turn(f32),
    /// Rotate around left (`&`/`^`).
    Pitch(f32),
    /// Rotate around heading (`\` / `/`).
    Roll(f32),
    /// Turn 180 degrees (`|`).
    TurnAround,

    // --- Pen ---
    /// Multiply width by [`WIDTH_SHRINK`] (`!`).
    ShrinkWidth,
    /// Multiply width by [`WIDTH_GROW`] (`<`).
    GrowWidth,
    /// Multiply width by [`WIDTH_SHRINK`] (`>`).
    ///
    /// Despite the name this is the same factor as `!`, not a division by
    /// [`WIDTH_GROW`]. Grammars written against the classic renderer rely on it.
    DivideWidth,

    // --- Flow Control ---
    /// Save the full turtle state onto the stack and taper the width (`[`).
    Push,
    /// Restore the most recently pushed turtle state (`]`).
    Pop,
    /// No-op — symbol has no registered meaning.
    Ignore,
}

impl TurtleOp {
    /// Maps a grammar symbol to its turtle operation.
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            'F' | 'A' | 'B' => TurtleOp::Draw,
            'f' => TurtleOp::Move,
            '+' => TurtleOp::Turn(1.0),
            '-' => TurtleOp::Turn(-1.0),
            '&' => TurtleOp::Pitch(1.0),
            '^' => TurtleOp::Pitch(-1.0),
            '\\' => TurtleOp::Roll(1.0),
            '/' => TurtleOp::Roll(-1.0),
            '|' => TurtleOp::TurnAround,
            '[' => TurtleOp::Push,
            ']' => TurtleOp::Pop,
            '!' => TurtleOp::ShrinkWidth,
            '<' => TurtleOp::GrowWidth,
            '>' => TurtleOp::DivideWidth,
            _ => TurtleOp::Ignore,
        }
    }
}
