//! Simulation configuration read from the process environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Settings for one simulation run.
#[derive(Clone, Debug)]
pub struct SimConfig {
    pub data_dir: PathBuf,
    pub level: String,
    /// Simulated time advanced per frame.
    pub frame: Duration,
    /// Pace frames against the wall clock instead of running flat out.
    pub realtime: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            level: "demo".to_owned(),
            frame: Duration::from_millis(16),
            realtime: false,
        }
    }
}

impl SimConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `PICKUP_DATA_DIR`
    /// - `PICKUP_LEVEL`
    /// - `PICKUP_FRAME_MS`
    /// - `PICKUP_REALTIME`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("PICKUP_DATA_DIR") {
            config.data_dir = dir;
        }

        if let Some(level) = read_env::<String>("PICKUP_LEVEL") {
            config.level = level;
        }

        if let Some(ms) = read_env::<u64>("PICKUP_FRAME_MS") {
            config.frame = Duration::from_millis(ms.max(1));
        }

        if let Some(realtime) = read_env::<bool>("PICKUP_REALTIME") {
            config.realtime = realtime;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
