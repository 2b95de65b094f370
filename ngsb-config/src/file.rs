use std::path::{Path, PathBuf};

use crate::{Config, Result};

/// A config.toml file with both its location and parsed contents.
#[derive(Debug)]
pub struct ConfigFile {
    path: PathBuf,
    config: Config,
}

impl ConfigFile {
    /// Open and parse a config.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = Config::from_str_with_filename(&content, &filename)?;

        Ok(Self { path, config })
    }

    /// Open `path` if it is a file, otherwise use the default config.
    ///
    /// The returned file keeps `path` either way.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.is_file() {
            Self::open(path)
        } else {
            Ok(Self {
                path: path.to_path_buf(),
                config: Config::default(),
            })
        }
    }

    /// Whether the config came from disk rather than the defaults.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed config.
    pub fn config(&self) -> &Config {
        &self.config
    }
}
