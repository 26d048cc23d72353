use std::{
    env, io,
    path::{Path, PathBuf},
    str::FromStr,
    sync::LazyLock,
};

use serde::Deserialize;
use thiserror::Error;
use toml::Table;

pub const CONFIG_PATH_VAR: &str = "PANE_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "pane_config.toml";

static CONFIG: LazyLock<Config> = LazyLock::new(init_config);

fn init_config() -> Config {
    Config::from_env().unwrap_or_else(|err| {
        log::error!("Failed to load config, falling back to defaults: {err}");
        Config::default()
    })
}

pub trait ConfigSection: for<'a> Deserialize<'a> + Default {
    fn section_name() -> &'static str;
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse config: {0}")]
    FailedToParse(#[from] toml::de::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, Default)]
pub struct Config {
    table: Table,
}

impl Config {
    /// Reads the config file at `path`. A missing file yields an empty config
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();

        match std::fs::read_to_string(path) {
            Ok(contents) => contents.parse(),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("No config file at `{}`, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Reads the config file named by `PANE_CONFIG_PATH`, or `pane_config.toml`
    pub fn from_env() -> ConfigResult<Self> {
        let path = env::var(CONFIG_PATH_VAR).unwrap_or(String::from(DEFAULT_CONFIG_PATH));
        Self::load(path)
    }

    pub fn section<C: ConfigSection>(&self) -> ConfigResult<C> {
        if let Some(value) = self.table.get(C::section_name()) {
            value.clone().try_into().map_err(|err| err.into())
        } else {
            Ok(Default::default())
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self { table: s.parse()? })
    }
}

/// Config loaded from `PANE_CONFIG_PATH` on first use
pub fn get_config() -> &'static Config {
    &CONFIG
}

pub fn get_config_section<C: ConfigSection>() -> ConfigResult<C> {
    get_config().section()
}

#[cfg(test)]
mod test {
    use serde::Deserialize;

    use super::{get_config, get_config_section, Config, ConfigError, ConfigSection};

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(default)]
    struct Render {
        vsync: bool,
        frames_in_flight: u32,
    }

    impl Default for Render {
        fn default() -> Self {
            Self {
                vsync: true,
                frames_in_flight: 2,
            }
        }
    }

    impl ConfigSection for Render {
        fn section_name() -> &'static str {
            "render"
        }
    }

    #[test]
    fn should_read_section() {
        let config: Config = "[render]\nvsync = false\nframes_in_flight = 3"
            .parse()
            .unwrap();

        let render = config.section::<Render>().unwrap();
        assert_eq!(
            render,
            Render {
                vsync: false,
                frames_in_flight: 3
            }
        );
    }

    #[test]
    fn should_fill_missing_keys_with_defaults() {
        let config: Config = "[render]\nframes_in_flight = 4".parse().unwrap();

        let render = config.section::<Render>().unwrap();
        assert!(render.vsync);
        assert_eq!(render.frames_in_flight, 4);
    }

    #[test]
    fn should_default_missing_section() {
        let config: Config = "[audio]\nvolume = 0.5".parse().unwrap();

        assert_eq!(config.section::<Render>().unwrap(), Render::default());
    }

    #[test]
    fn should_reject_malformed_toml() {
        let result = "[render\nvsync = ".parse::<Config>();

        assert!(matches!(result, Err(ConfigError::FailedToParse(_))));
    }

    #[test]
    fn should_reject_mistyped_section() {
        let config: Config = "[render]\nvsync = \"yes\"".parse().unwrap();

        assert!(matches!(
            config.section::<Render>(),
            Err(ConfigError::FailedToParse(_))
        ));
    }

    #[test]
    fn should_treat_missing_file_as_empty() {
        let config = Config::load("definitely/not/a/config.toml").unwrap();

        assert!(config.table().is_empty());
    }

    #[test]
    fn should_load_global_config_once() {
        let config = get_config();

        assert!(std::ptr::eq(config, get_config()));
        assert_eq!(
            get_config_section::<Render>().unwrap(),
            config.section::<Render>().unwrap()
        );
    }
}
