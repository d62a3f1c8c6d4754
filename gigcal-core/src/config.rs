//! Run configuration.
//!
//! Settings come from, in increasing priority: built-in defaults, an optional
//! TOML file, and `GIGCAL_*` environment variables.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{GigcalError, GigcalResult};
use crate::ics::DEFAULT_PRODID;

static DEFAULT_INPUT_FILE: &str = "data/master_events.txt";
static DEFAULT_TXT_DIR: &str = "output/txt";
static DEFAULT_ICS_DIR: &str = "output/ics";
static DEFAULT_ALL_AREAS_LABEL: &str = "AllLondon";

/// Config file looked up in the working directory.
pub static LOCAL_CONFIG_FILE: &str = "gigcal.toml";

fn default_input_file() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_FILE)
}

fn default_txt_dir() -> PathBuf {
    PathBuf::from(DEFAULT_TXT_DIR)
}

fn default_ics_dir() -> PathBuf {
    PathBuf::from(DEFAULT_ICS_DIR)
}

fn default_all_areas_label() -> String {
    DEFAULT_ALL_AREAS_LABEL.to_string()
}

fn default_prodid() -> String {
    DEFAULT_PRODID.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GigcalConfig {
    /// Master listing to read.
    #[serde(default = "default_input_file")]
    pub input_file: PathBuf,

    /// Where `<area>_Events.txt` files go.
    #[serde(default = "default_txt_dir")]
    pub txt_dir: PathBuf,

    /// Where `<area>_Events.ics` files go.
    #[serde(default = "default_ics_dir")]
    pub ics_dir: PathBuf,

    /// Name used for the calendar that spans every area.
    #[serde(default = "default_all_areas_label")]
    pub all_areas_label: String,

    #[serde(default = "default_prodid")]
    pub prodid: String,
}

impl Default for GigcalConfig {
    fn default() -> Self {
        GigcalConfig {
            input_file: default_input_file(),
            txt_dir: default_txt_dir(),
            ics_dir: default_ics_dir(),
            all_areas_label: default_all_areas_label(),
            prodid: default_prodid(),
        }
    }
}

/// A loaded config together with the file it came from, if any.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: GigcalConfig,
    pub source: Option<PathBuf>,
}

impl GigcalConfig {
    /// Load the configuration.
    ///
    /// An explicit path must exist. Otherwise `./gigcal.toml` is used if
    /// present, then `~/.config/gigcal/config.toml`, then nothing.
    pub fn load(explicit: Option<&Path>) -> GigcalResult<LoadedConfig> {
        let source = match explicit {
            Some(path) => {
                let path = expand_path(path);
                if !path.exists() {
                    return Err(GigcalError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Some(path)
            }
            None => Self::discover(),
        };

        let mut builder = Config::builder();
        if let Some(ref path) = source {
            tracing::debug!(path = %path.display(), "Loading config file");
            builder = builder.add_source(File::from(path.clone()));
        }

        let config: GigcalConfig = builder
            .add_source(Environment::with_prefix("GIGCAL"))
            .build()
            .map_err(|e| GigcalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| GigcalError::Config(e.to_string()))?;

        Ok(LoadedConfig {
            config: config.expanded(),
            source,
        })
    }

    /// User-level config path (~/.config/gigcal/config.toml on Linux).
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gigcal").join("config.toml"))
    }

    fn discover() -> Option<PathBuf> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Some(local);
        }

        Self::user_config_path().filter(|path| path.exists())
    }

    /// Same config with `~` expanded in every path.
    pub fn expanded(self) -> Self {
        GigcalConfig {
            input_file: expand_path(&self.input_file),
            txt_dir: expand_path(&self.txt_dir),
            ics_dir: expand_path(&self.ics_dir),
            ..self
        }
    }
}

fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}
