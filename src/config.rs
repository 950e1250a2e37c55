//! TOML scene files: which grammars to grow and how to render them.
//!
//! ```toml
//! output_dir = "out"
//!
//! [[system]]
//! name = "dragon"
//! axiom = "F"
//! generations = 12
//! rules = { F = "F+G", G = "F-G" }
//! turtle = { angle = 90.0 }
//! renders = [{ file = "dragon.svg", style = "rainbow", scale = 3.0 }]
//! ```
//!
//! A system may name a `preset` from [`crate::presets`] instead of (or in
//! addition to) spelling out its axiom and rules.

use crate::error::{ConfigError, SceneError};
use crate::export::{ExportSummary, Style, export_svg};
use crate::grammar::Grammar;
use crate::interpreter::{TurtleConfig, TurtleInterpreter};
use crate::presets;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_scale() -> f32 {
    10.0
}

fn default_style() -> Style {
    Style::Gradient
}

/// A batch of L-Systems and the images to produce from each.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Directory that relative render paths are resolved against.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default, rename = "system")]
    pub systems: Vec<SystemSpec>,
}

/// One grammar, its turtle parameters, and its render targets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SystemSpec {
    pub name: String,

    /// Name of a built-in grammar to start from.
    #[serde(default)]
    pub preset: Option<String>,

    /// Overrides the preset's axiom when both are given.
    #[serde(default)]
    pub axiom: Option<String>,

    /// Single-character symbol to replacement. Added on top of any preset rules.
    #[serde(default)]
    pub rules: BTreeMap<String, String>,

    #[serde(default)]
    pub generations: u32,

    /// Fields set here override the preset's parameters, or
    /// [`TurtleConfig::default`] without a preset. Unset fields keep the base value.
    #[serde(default)]
    pub turtle: TurtleOverrides,

    #[serde(default)]
    pub renders: Vec<RenderSpec>,
}

/// A single image to export.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderSpec {
    pub file: PathBuf,

    #[serde(default = "default_style")]
    pub style: Style,

    #[serde(default = "default_scale")]
    pub scale: f32,
}

/// Partial turtle parameters layered over a preset's [`TurtleConfig`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TurtleOverrides {
    #[serde(default)]
    pub angle: Option<f32>,
    #[serde(default)]
    pub step: Option<f32>,
    #[serde(default)]
    pub width_factor: Option<f32>,
}

impl TurtleOverrides {
    /// Replaces every field of `base` that is set here.
    pub fn apply(&self, base: TurtleConfig) -> TurtleConfig {
        TurtleConfig {
            angle_degrees: self.angle.unwrap_or(base.angle_degrees),
            step_length: self.step.unwrap_or(base.step_length),
            branch_width_factor: self.width_factor.unwrap_or(base.branch_width_factor),
        }
    }
}

impl RenderSpec {
    pub fn new(file: impl Into<PathBuf>, style: Style, scale: f32) -> Self {
        Self {
            file: file.into(),
            style,
            scale,
        }
    }
}

impl SystemSpec {
    fn preset(&self) -> Result<Option<presets::Preset>, ConfigError> {
        match &self.preset {
            None => Ok(None),
            Some(name) => presets::by_name(name)
                .map(Some)
                .ok_or_else(|| ConfigError::UnknownPreset {
                    system: self.name.clone(),
                    preset: name.clone(),
                }),
        }
    }

    /// Assembles the grammar from the preset, axiom and rule table.
    pub fn grammar(&self) -> Result<Grammar, ConfigError> {
        let mut grammar = match (&self.axiom, self.preset()?) {
            (Some(axiom), preset) => {
                let mut grammar = Grammar::new(axiom.as_str());
                if let Some(preset) = preset {
                    for (symbol, replacement) in preset.grammar.rules() {
                        grammar.add_rule(*symbol, replacement.as_str());
                    }
                }
                grammar
            }
            (None, Some(preset)) => preset.grammar,
            (None, None) => {
                return Err(ConfigError::MissingAxiom {
                    system: self.name.clone(),
                });
            }
        };

        for (key, replacement) in &self.rules {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(symbol), None) => grammar.add_rule(symbol, replacement.as_str()),
                _ => {
                    return Err(ConfigError::InvalidRuleSymbol {
                        system: self.name.clone(),
                        key: key.clone(),
                    });
                }
            }
        }

        Ok(grammar)
    }

    /// The preset's parameters (or the defaults) with `turtle` overrides applied.
    ///
    /// Step and width factor must be finite and non-negative so widths never
    /// go negative; the angle must be finite.
    pub fn turtle_config(&self) -> Result<TurtleConfig, ConfigError> {
        let base = self.preset()?.map(|p| p.turtle).unwrap_or_default();
        let config = self.turtle.apply(base);

        let non_negative = |v: f32| v.is_finite() && v >= 0.0;
        let checks = [
            ("angle", config.angle_degrees, config.angle_degrees.is_finite()),
            ("step", config.step_length, non_negative(config.step_length)),
            (
                "width_factor",
                config.branch_width_factor,
                non_negative(config.branch_width_factor),
            ),
        ];
        for (parameter, value, ok) in checks {
            if !ok {
                return Err(ConfigError::InvalidTurtleParameter {
                    system: self.name.clone(),
                    parameter,
                    value,
                });
            }
        }

        Ok(config)
    }

    /// Checks the grammar, turtle parameters and every render's scale.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grammar()?;
        self.turtle_config()?;
        for render in &self.renders {
            if !(render.scale.is_finite() && render.scale > 0.0) {
                return Err(ConfigError::InvalidRenderScale {
                    system: self.name.clone(),
                    file: render.file.clone(),
                    scale: render.scale,
                });
            }
        }
        Ok(())
    }
}

impl Scene {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let scene: Scene = toml::from_str(source)?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Checks every system without running anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.systems.iter().try_for_each(SystemSpec::validate)
    }

    /// The classic demo set: dragon, plant, 3D tree, Koch, branching bush and
    /// Sierpinski triangle across every style.
    pub fn gallery(output_dir: impl Into<PathBuf>) -> Self {
        let system = |name: &str, preset: &str, generations: u32, renders: Vec<RenderSpec>| {
            SystemSpec {
                name: name.to_string(),
                preset: Some(preset.to_string()),
                axiom: None,
                rules: BTreeMap::new(),
                generations,
                turtle: TurtleOverrides::default(),
                renders,
            }
        };

        Self {
            output_dir: output_dir.into(),
            systems: vec![
                system(
                    "Dragon Curve",
                    "dragon",
                    12,
                    vec![
                        RenderSpec::new("dragon_original.svg", Style::Plain, 3.0),
                        RenderSpec::new("dragon_rainbow.svg", Style::Rainbow, 3.0),
                        RenderSpec::new("dragon_gradient.svg", Style::Gradient, 3.0),
                    ],
                ),
                system(
                    "Plant A",
                    "plant_a",
                    6,
                    vec![
                        RenderSpec::new("plant_gradient.svg", Style::Gradient, 12.0),
                        RenderSpec::new("plant_light.svg", Style::Light, 12.0),
                    ],
                ),
                system(
                    "3D Tree",
                    "tree",
                    3,
                    vec![RenderSpec::new("tree_depth.svg", Style::Depth, 8.0)],
                ),
                system(
                    "Koch Curve",
                    "koch",
                    5,
                    vec![
                        RenderSpec::new("koch_rainbow.svg", Style::Rainbow, 8.0),
                        RenderSpec::new("koch_depth.svg", Style::Depth, 8.0),
                    ],
                ),
                system(
                    "Custom Branching",
                    "custom",
                    5,
                    vec![
                        RenderSpec::new("custom_gradient.svg", Style::Gradient, 15.0),
                        RenderSpec::new("custom_light.svg", Style::Light, 15.0),
                    ],
                ),
                system(
                    "Sierpinski Triangle",
                    "sierpinski",
                    6,
                    vec![RenderSpec::new("sierpinski_rainbow.svg", Style::Rainbow, 10.0)],
                ),
            ],
        }
    }

    /// Grows, interprets and exports every system in order.
    ///
    /// The whole scene is validated before anything is written. Each system
    /// gets its own interpreter. Renders of empty geometry are skipped and do
    /// not appear in the returned summaries.
    pub fn run(&self) -> Result<Vec<ExportSummary>, SceneError> {
        self.validate()?;
        std::fs::create_dir_all(&self.output_dir).map_err(|source| SceneError::CreateDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let mut written = Vec::new();
        for system in &self.systems {
            let grammar = system.grammar()?;
            let interpreter = TurtleInterpreter::new(system.turtle_config()?);

            let symbols = grammar.rewrite(system.generations);
            let geometry = interpreter.interpret(&symbols);
            info!(
                system = %system.name,
                generations = system.generations,
                length = symbols.len(),
                segments = geometry.len(),
                "grew system"
            );

            for render in &system.renders {
                let path = self.output_dir.join(&render.file);
                match export_svg(geometry.segments(), render.scale, render.style, &path)? {
                    Some(summary) => written.push(summary),
                    None => warn!(
                        system = %system.name,
                        path = %path.display(),
                        "no segments drawn, skipping render"
                    ),
                }
            }
        }

        Ok(written)
    }
}
