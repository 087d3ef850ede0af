//! Configuration handling for the TUI

use crate::submission::DEFAULT_DELAY;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the simulated submission delay
pub const SUBMIT_DELAY_ENV: &str = "RESEARCH_APPLY_SUBMIT_DELAY_MS";

const DEFAULT_TOAST_SECONDS: u64 = 4;
const DEFAULT_MARQUEE_SPEED: f32 = 8.0;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TuiConfig {
    /// Simulated submission round-trip in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// How long toasts stay visible
    pub toast_seconds: Option<u64>,
    /// Start on the landing page with the headline already revealed
    pub skip_intro: Option<bool>,
    /// Marquee scroll speed in cells per second
    pub marquee_speed: Option<f32>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("org", "research-apply", "research-apply")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file
    pub fn data_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                serde_json::from_str(&content)?
            }
            _ => Self::default(),
        };

        if let Ok(raw) = std::env::var(SUBMIT_DELAY_ENV) {
            config.apply_delay_override(&raw);
        }

        Ok(config)
    }

    fn apply_delay_override(&mut self, raw: &str) {
        match raw.trim().parse::<u64>() {
            Ok(ms) => self.submit_delay_ms = Some(ms),
            Err(_) => tracing::warn!("Ignoring invalid {SUBMIT_DELAY_ENV}={raw:?}"),
        }
    }

    pub fn submit_delay(&self) -> Duration {
        self.submit_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_DELAY)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_seconds.unwrap_or(DEFAULT_TOAST_SECONDS))
    }

    pub fn skip_intro(&self) -> bool {
        self.skip_intro.unwrap_or(false)
    }

    pub fn marquee_speed(&self) -> f32 {
        self.marquee_speed.unwrap_or(DEFAULT_MARQUEE_SPEED)
    }
}
