//! Configuration file discovery and loading for rain.
//!
//! Settings live in `config.toml` under the platform config directory. A
//! missing file is not an error; every field falls back to its default.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use rain_core::Settings;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Largest accepted canvas width or height.
pub const MAX_CANVAS_UNITS: u32 = 1_000_000;

/// Largest accepted number of canvas units per terminal cell.
pub const MAX_CELL_UNITS: u32 = 1_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid setting `{field}`: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

/// Platform directories for the application.
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "rain")
}

/// Path of the user's config file, if a home directory can be determined.
pub fn config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load settings from the default config path.
pub fn load() -> Result<Settings> {
    match config_path() {
        Some(path) => load_from(&path),
        None => {
            tracing::warn!("no home directory, using default settings");
            Ok(Settings::default())
        }
    }
}

/// Load settings from `path`, using defaults when the file does not exist.
pub fn load_from(path: &Path) -> Result<Settings> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Settings::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let settings = parse(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    validate(&settings)?;
    tracing::info!(path = %path.display(), "loaded config");
    Ok(settings)
}

fn parse(content: &str) -> std::result::Result<Settings, toml::de::Error> {
    toml::from_str(content)
}

/// Reject settings the animation cannot run with.
pub fn validate(settings: &Settings) -> Result<()> {
    let animation = &settings.animation;
    let window = &settings.window;

    let positive = [
        ("animation.tick_ms", animation.tick_ms),
        ("animation.column_width", u64::from(animation.column_width)),
        ("animation.min_speed", u64::from(animation.min_speed)),
        ("animation.fade_step", u64::from(animation.fade_step)),
        ("window.width", u64::from(window.width)),
        ("window.height", u64::from(window.height)),
        ("window.cell_width", u64::from(window.cell_width)),
        ("window.cell_height", u64::from(window.cell_height)),
    ];
    for (field, value) in positive {
        if value == 0 {
            return Err(ConfigError::Invalid {
                field,
                message: "must be greater than zero".to_string(),
            });
        }
    }

    let bounded = [
        ("window.width", window.width, MAX_CANVAS_UNITS),
        ("window.height", window.height, MAX_CANVAS_UNITS),
        ("window.cell_width", window.cell_width, MAX_CELL_UNITS),
        ("window.cell_height", window.cell_height, MAX_CELL_UNITS),
    ];
    for (field, value, max) in bounded {
        if value > max {
            return Err(ConfigError::Invalid {
                field,
                message: format!("{value} is larger than {max}"),
            });
        }
    }

    if animation.spawn_brightness <= animation.fade_step {
        return Err(ConfigError::Invalid {
            field: "animation.spawn_brightness",
            message: format!(
                "{} must be greater than fade_step {}",
                animation.spawn_brightness, animation.fade_step
            ),
        });
    }

    if animation.min_speed > animation.max_speed {
        return Err(ConfigError::Invalid {
            field: "animation.min_speed",
            message: format!(
                "{} is greater than max_speed {}",
                animation.min_speed, animation.max_speed
            ),
        });
    }

    if animation.alphabet.trim().is_empty() {
        return Err(ConfigError::Invalid {
            field: "animation.alphabet",
            message: "must contain at least one character".to_string(),
        });
    }

    Ok(())
}
