//! # symbios-sketch
//!
//! Grows L-System grammars and draws them with a 3D turtle, exporting the
//! resulting line art as stylized SVG.
//!
//! The pipeline runs strictly forward:
//! [`Grammar::rewrite`] produces a symbol string, [`TurtleInterpreter::interpret`]
//! turns it into [`Geometry`], and [`export_svg`] projects that onto the XY
//! plane and writes the image.
//!
//! ```no_run
//! use symbios_sketch::{Grammar, Style, TurtleConfig, TurtleInterpreter, export_svg};
//!
//! let grammar = Grammar::new("F").with_rule('F', "F[+F]F[-F]F");
//! let interpreter = TurtleInterpreter::new(TurtleConfig::new(22.0, 1.0));
//! let geometry = interpreter.interpret(&grammar.rewrite(5));
//! export_svg(geometry.segments(), 12.0, Style::Gradient, "plant.svg")?;
//! # Ok::<(), symbios_sketch::ExportError>(())
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod export;
pub mod geometry;
pub mod grammar;
pub mod interpreter;
pub mod math;
pub mod presets;
pub mod turtle;

pub use config::*;
pub use error::*;
pub use export::*;
pub use geometry::*;
pub use grammar::*;
pub use interpreter::*;
pub use turtle::*;
