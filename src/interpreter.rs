//! Interpreter that converts an L-System symbol string into [`Geometry`].
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with a
//! [`TurtleConfig`], then call [`TurtleInterpreter::interpret`] with the output
//! of [`Grammar::rewrite`](crate::Grammar::rewrite).

use crate::geometry::{Geometry, Segment};
use crate::turtle::{TurtleOp, TurtleState, WIDTH_GROW, WIDTH_SHRINK};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for turtle interpretation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurtleConfig {
    /// Rotation applied by every turn, pitch and roll symbol, in degrees.
    #[serde(rename = "angle")]
    pub angle_degrees: f32,
    /// Distance covered by `F` and `f`.
    #[serde(rename = "step")]
    pub step_length: f32,
    /// Width multiplier applied on every `[`, tapering branches.
    #[serde(rename = "width_factor")]
    pub branch_width_factor: f32,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            angle_degrees: 25.0,
            step_length: 1.0,
            branch_width_factor: 0.9,
        }
    }
}

impl TurtleConfig {
    pub fn new(angle_degrees: f32, step_length: f32) -> Self {
        Self {
            angle_degrees,
            step_length,
            ..Default::default()
        }
    }

    pub fn with_branch_width_factor(mut self, factor: f32) -> Self {
        self.branch_width_factor = factor;
        self
    }
}

/// Interprets L-System output as 3D turtle motion.
#[derive(Clone, Debug, Default)]
pub struct TurtleInterpreter {
    config: TurtleConfig,
}

impl TurtleInterpreter {
    pub fn new(config: TurtleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TurtleConfig {
        &self.config
    }

    /// Interprets `symbols` and returns the drawn segments.
    ///
    /// Every call starts from a fresh [`TurtleState::default`] at the origin
    /// facing `+Y` with an empty stack, so repeated calls never see each
    /// other's state. Symbols are mapped through [`TurtleOp::from_symbol`];
    /// unknown symbols are silently ignored.
    ///
    /// # Push / Pop
    ///
    /// `[` saves the full turtle state and then multiplies the width by
    /// `branch_width_factor`. `]` restores the saved state, including the
    /// width from before the taper. A `]` with nothing saved does nothing.
    pub fn interpret(&self, symbols: &str) -> Geometry {
        let angle = self.config.angle_degrees.to_radians();
        let step = self.config.step_length;

        let mut geometry = Geometry::default();
        let mut turtle = TurtleState::default();
        let mut stack: Vec<TurtleState> = Vec::new();

        for symbol in symbols.chars() {
            match TurtleOp::from_symbol(symbol) {
                TurtleOp::Draw => {
                    let end = turtle.ahead(step);
                    geometry.push(Segment {
                        start: turtle.position,
                        end,
                        width: turtle.width,
                        color: turtle.color,
                    });
                    turtle.position = end;
                }
                TurtleOp::Move => turtle.position = turtle.ahead(step),

                TurtleOp::Turn(s) => turtle.turn(angle * s),
                TurtleOp::Pitch(s) => turtle.pitch(angle * s),
                TurtleOp::Roll(s) => turtle.roll(angle * s),
                TurtleOp::TurnAround => turtle.turn_around(),

                TurtleOp::ShrinkWidth | TurtleOp::DivideWidth => turtle.width *= WIDTH_SHRINK,
                TurtleOp::GrowWidth => turtle.width *= WIDTH_GROW,

                TurtleOp::Push => {
                    stack.push(turtle.clone());
                    turtle.width *= self.config.branch_width_factor;
                }
                TurtleOp::Pop => {
                    if let Some(state) = stack.pop() {
                        turtle = state;
                    }
                }
                TurtleOp::Ignore => {}
            }
        }

        debug!(segments = geometry.len(), "interpreted symbol string");
        geometry
    }
}
