use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scene file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scene file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("system `{system}` has neither an axiom nor a preset")]
    MissingAxiom { system: String },

    #[error("system `{system}`: unknown preset `{preset}`")]
    UnknownPreset { system: String, preset: String },

    #[error("system `{system}`: turtle parameter `{parameter}` = {value} is out of range")]
    InvalidTurtleParameter {
        system: String,
        parameter: &'static str,
        value: f32,
    },

    #[error("system `{system}`: render {} has invalid scale {scale}", file.display())]
    InvalidRenderScale {
        system: String,
        file: PathBuf,
        scale: f32,
    },

    #[error("system `{system}`: rule key `{key}` must be exactly one character")]
    InvalidRuleSymbol { system: String, key: String },
}

#[derive(Debug, Error)]
pub enum SceneError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
