//! Classic grammars, ready to rewrite.
//!
//! Each preset pairs a [`Grammar`] with the turtle angle it was designed for.

use crate::grammar::Grammar;
use crate::interpreter::TurtleConfig;

/// A named grammar with its intended turtle parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub grammar: Grammar,
    pub turtle: TurtleConfig,
}

/// Heighway dragon. `G` is not a drawing symbol, so only the `F` edges render.
pub fn dragon_curve() -> Preset {
    Preset {
        name: "dragon",
        grammar: Grammar::new("F").with_rule('F', "F+G").with_rule('G', "F-G"),
        turtle: TurtleConfig::new(90.0, 1.0),
    }
}

pub fn sierpinski_triangle() -> Preset {
    Preset {
        name: "sierpinski",
        grammar: Grammar::new("F-G-G")
            .with_rule('F', "F-G+F+G-F")
            .with_rule('G', "GG"),
        turtle: TurtleConfig::new(120.0, 1.0),
    }
}

pub fn koch_curve() -> Preset {
    Preset {
        name: "koch",
        grammar: Grammar::new("F").with_rule('F', "F+F-F-F+F"),
        turtle: TurtleConfig::new(90.0, 1.0),
    }
}

pub fn plant_a() -> Preset {
    Preset {
        name: "plant_a",
        grammar: Grammar::new("F").with_rule('F', "F[+F]F[-F]F"),
        turtle: TurtleConfig::new(22.0, 1.0),
    }
}

pub fn plant_b() -> Preset {
    Preset {
        name: "plant_b",
        grammar: Grammar::new("F").with_rule('F', "FF-[-F+F+F]+[+F-F-F]"),
        turtle: TurtleConfig::new(22.5, 1.0),
    }
}

/// A bushy 3D tree using pitch, roll and width symbols.
pub fn tree_3d() -> Preset {
    Preset {
        name: "tree",
        grammar: Grammar::new("A")
            .with_rule('A', "!![&FL!A]/////'/[&FL!A]///////[&FL!A]")
            .with_rule('F', "S //// F")
            .with_rule('S', "F L")
            .with_rule('L', "['''^^{-f+f+f-|-f+f+f}]"),
        turtle: TurtleConfig::new(22.5, 1.0).with_branch_width_factor(0.8),
    }
}

pub fn hilbert_curve_3d() -> Preset {
    Preset {
        name: "hilbert",
        grammar: Grammar::new("A")
            .with_rule('A', "B-F+CFC+F-D&F^D-F+&&CFC+F+B//")
            .with_rule('B', "A&F^CFB^F^D^^-F-D^|F^B|FC^F^A//")
            .with_rule('C', "|D^|F^B-F+C^F^A&&FA&F^C+F+B^F^D//")
            .with_rule('D', "|CFB-F+B|FA&F^A&&FB-F+B|FC//"),
        turtle: TurtleConfig::new(90.0, 1.0),
    }
}

/// The branching pattern `F[+F][-F]FF`.
pub fn custom_branching() -> Preset {
    Preset {
        name: "custom",
        grammar: Grammar::new("F").with_rule('F', "F[+F][-F]FF"),
        turtle: TurtleConfig::new(25.0, 1.0),
    }
}

/// Every preset, in a stable order.
pub fn all() -> Vec<Preset> {
    vec![
        dragon_curve(),
        sierpinski_triangle(),
        koch_curve(),
        plant_a(),
        plant_b(),
        tree_3d(),
        hilbert_curve_3d(),
        custom_branching(),
    ]
}

/// Looks up a preset by its `name`.
pub fn by_name(name: &str) -> Option<Preset> {
    all().into_iter().find(|p| p.name == name)
}
