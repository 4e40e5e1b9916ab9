//! Settings for the `kado` binary, read from `./settings.ini` via the
//! `config` crate (kept from the teacher's layout).
//!
//! Chunk boundaries are a build-time contract (spec.md §6): `chunk_settings`
//! below is read and logged for operator visibility, but is informational
//! only — it is never wired into [`crate::gear::cut`]. The constants that
//! actually govern chunking live in [`crate::gear`].

use config::{Config, ConfigError, File};

#[derive(serde::Deserialize, Clone, Debug, Default)]
pub struct ChunkSettings {
    pub min: usize,
    pub avg: usize,
    pub max: usize,
}

#[derive(serde::Deserialize, Clone, Debug, Default)]
pub struct Settings {
    #[serde(default)]
    pub chunk_settings: ChunkSettings,
    #[serde(default)]
    pub debug: bool,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config_file = File::with_name("./settings.ini").required(false);
        let settings_builder = Config::builder().add_source(config_file).build()?;

        settings_builder.try_deserialize::<Settings>()
    }

    /// `log::LevelFilter` this binary's logger should run at, derived from
    /// `debug`.
    pub fn log_level(&self) -> log::LevelFilter {
        if self.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}
