//! Saver configuration resource.
//!
//! Settings are loaded once from an INI file before any window exists and
//! are immutable afterwards. A missing file, a parse failure, a missing or
//! unusable `frameformat`, or a zero frame count/delay are fatal: the process
//! reports the error and exits with code 1.
//!
//! # Configuration File Format
//!
//! ```ini
//! [saver]
//! frameformat = ./frames/frame%d.png
//! framecount = 8
//! framedelay = 100
//! thingcount = 24
//! ```
//!
//! `frameformat` is a printf-style path template: the first `%d` (or
//! zero-padded `%0Nd`) is replaced by the frame index, counting from 1.

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::{Path, PathBuf};
use thiserror::Error;

const SECTION: &str = "saver";
const DEFAULT_FRAME_DELAY_MS: u32 = 100;
const DEFAULT_THING_COUNT: u32 = 16;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot load config {path}: {reason}")]
    Load { path: String, reason: String },
    #[error("missing required key `{0}` in [saver]")]
    MissingKey(&'static str),
    #[error("invalid value for `{key}`: {reason}")]
    InvalidValue { key: &'static str, reason: String },
    #[error("`frameformat` value `{0}` contains no %d frame-index placeholder")]
    BadTemplate(String),
}

/// Immutable saver settings.
#[derive(Resource, Debug, Clone)]
pub struct SaverConfig {
    /// printf-style path template for frame images, one integer substitution.
    pub frame_format: String,
    /// Number of frames in the animation. At least 1.
    pub frame_count: u32,
    /// Display duration of each frame, in milliseconds. At least 1.
    pub frame_delay_ms: u32,
    /// Number of things spawned per scene.
    pub thing_count: u32,
    /// Path the configuration was loaded from.
    pub config_path: PathBuf,
}

impl SaverConfig {
    /// Load and validate the configuration from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut ini = Ini::new();
        ini.load(path).map_err(|reason| ConfigError::Load {
            path: path.display().to_string(),
            reason,
        })?;
        let config = Self::from_ini(&ini, path)?;
        info!(
            "Loaded config from {}: {} frames of `{}`, {} ms/frame, {} things per scene",
            path.display(),
            config.frame_count,
            config.frame_format,
            config.frame_delay_ms,
            config.thing_count
        );
        Ok(config)
    }

    fn from_ini(ini: &Ini, path: &Path) -> Result<Self, ConfigError> {
        let frame_format = ini
            .get(SECTION, "frameformat")
            .ok_or(ConfigError::MissingKey("frameformat"))?;
        if expand_template(&frame_format, 1).is_none() {
            return Err(ConfigError::BadTemplate(frame_format));
        }

        let frame_count = read_uint(ini, "framecount")?
            .ok_or(ConfigError::MissingKey("framecount"))?;
        if frame_count == 0 {
            return Err(ConfigError::InvalidValue {
                key: "framecount",
                reason: "must be at least 1".into(),
            });
        }

        let frame_delay_ms = read_uint(ini, "framedelay")?.unwrap_or(DEFAULT_FRAME_DELAY_MS);
        if frame_delay_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "framedelay",
                reason: "must be at least 1 millisecond".into(),
            });
        }

        let thing_count = read_uint(ini, "thingcount")?.unwrap_or(DEFAULT_THING_COUNT);

        Ok(Self {
            frame_format,
            frame_count,
            frame_delay_ms,
            thing_count,
            config_path: path.to_path_buf(),
        })
    }

    /// Path of the image for frame `index` (counting from 1).
    pub fn frame_path(&self, index: u32) -> String {
        expand_template(&self.frame_format, index).expect("frameformat validated at load")
    }
}

fn read_uint(ini: &Ini, key: &'static str) -> Result<Option<u32>, ConfigError> {
    match ini.getuint(SECTION, key) {
        Ok(Some(v)) => u32::try_from(v).map(Some).map_err(|_| ConfigError::InvalidValue {
            key,
            reason: format!("{v} does not fit in 32 bits"),
        }),
        Ok(None) => Ok(None),
        Err(reason) => Err(ConfigError::InvalidValue { key, reason }),
    }
}

/// Substitute `index` for the first `%d`/`%0Nd` directive in `template`.
///
/// `%%` is a literal percent sign. Returns `None` when the template has no
/// frame-index directive at all.
fn expand_template(template: &str, index: u32) -> Option<String> {
    let mut out = String::with_capacity(template.len() + 4);
    let mut rest = template;
    let mut substituted = false;
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];
        if let Some(stripped) = tail.strip_prefix('%') {
            out.push('%');
            rest = stripped;
            continue;
        }
        if !substituted {
            let zero_pad = tail.starts_with('0');
            let digits = tail.chars().take_while(|c| c.is_ascii_digit()).count();
            let after = &tail[digits..];
            if let Some(stripped) = after.strip_prefix('d') {
                let width: usize = if digits > 0 {
                    tail[..digits].parse().ok()?
                } else {
                    0
                };
                if zero_pad {
                    out.push_str(&format!("{index:0width$}"));
                } else {
                    out.push_str(&format!("{index:width$}"));
                }
                substituted = true;
                rest = stripped;
                continue;
            }
        }
        out.push('%');
        rest = tail;
    }
    out.push_str(rest);
    if substituted { Some(out) } else { None }
}
