// symbios-sketch CLI entry point.
//
// Grows the L-Systems described by a TOML scene file and writes their SVG
// renders. Without a scene file, renders the built-in gallery.
//
// Usage:
//   symbios-sketch [scene.toml] [--out DIR]
//
// Log verbosity follows RUST_LOG (default: info).

use std::path::PathBuf;
use std::process::ExitCode;

use symbios_sketch::{Scene, SceneError};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).compact().init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match CliArgs::parse(&args).map_err(CliError::from).and_then(run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}\nusage: symbios-sketch [scene.toml] [--out DIR]")]
    Usage(#[from] UsageError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

#[derive(Debug, PartialEq, Error)]
enum UsageError {
    #[error("`{0}` expects a value")]
    MissingValue(String),

    #[error("unknown option `{0}`")]
    UnknownFlag(String),

    #[error("unexpected argument `{0}`, only one scene file is accepted")]
    ExtraArgument(String),
}

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    scene: Option<PathBuf>,
    out_dir: Option<PathBuf>,
}

impl CliArgs {
    /// Accepts the scene path and `--out DIR` in any order.
    fn parse(args: &[String]) -> Result<Self, UsageError> {
        let mut parsed = Self::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--out" => {
                    let dir = iter
                        .next()
                        .filter(|v| !v.starts_with("--"))
                        .ok_or_else(|| UsageError::MissingValue(arg.clone()))?;
                    parsed.out_dir = Some(PathBuf::from(dir));
                }
                flag if flag.starts_with('-') => {
                    return Err(UsageError::UnknownFlag(flag.to_string()));
                }
                path if parsed.scene.is_none() => parsed.scene = Some(PathBuf::from(path)),
                extra => return Err(UsageError::ExtraArgument(extra.to_string())),
            }
        }
        Ok(parsed)
    }
}

fn run(args: CliArgs) -> Result<(), CliError> {
    let mut scene = match &args.scene {
        Some(path) => {
            info!(path = %path.display(), "loading scene");
            Scene::load(path).map_err(SceneError::from)?
        }
        None => {
            info!("no scene file given, rendering the gallery");
            Scene::gallery(".")
        }
    };
    if let Some(dir) = args.out_dir {
        scene.output_dir = dir;
    }

    let written = scene.run()?;
    info!(
        files = written.len(),
        output_dir = %scene.output_dir.display(),
        "all systems rendered"
    );
    Ok(())
}
