use anyhow::{Context, Result, ensure};
use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;
use std::time::Duration;

/// Largest timeout whose length in seconds still fits a `u64`
pub const MAX_SESSION_TIMEOUT_MINUTES: u64 = u64::MAX / 60;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub session_timeout_minutes: u64,
    pub cleanup_interval_seconds: u64,
    /// Whether the hand landmark detector is available for gesture input
    pub gesture_enabled: bool,
    /// Base seed for reproducible opponents; unset means OS entropy per session
    pub game_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let session_timeout_minutes = parse_or(
            &lookup,
            "SESSION_TIMEOUT_MINUTES",
            defaults.session_timeout_minutes,
        )?;
        ensure!(
            session_timeout_minutes <= MAX_SESSION_TIMEOUT_MINUTES,
            "Invalid SESSION_TIMEOUT_MINUTES: {session_timeout_minutes} exceeds {MAX_SESSION_TIMEOUT_MINUTES}"
        );

        Ok(Self {
            host: parse_or(&lookup, "HOST", defaults.host)?,
            port: parse_or(&lookup, "PORT", defaults.port)?,
            session_timeout_minutes,
            cleanup_interval_seconds: parse_or(
                &lookup,
                "CLEANUP_INTERVAL_SECONDS",
                defaults.cleanup_interval_seconds,
            )?,
            gesture_enabled: parse_or(&lookup, "GESTURE_ENABLED", defaults.gesture_enabled)?,
            game_seed: lookup("GAME_SEED")
                .map(|raw| {
                    raw.trim()
                        .parse::<u64>()
                        .with_context(|| format!("Invalid GAME_SEED: {raw}"))
                })
                .transpose()?,
        })
    }

    pub fn session_timeout(&self) -> Duration {
        Duration::from_secs(self.session_timeout_minutes.saturating_mul(60))
    }

    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval_seconds.max(1))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 5000,
            session_timeout_minutes: 60,
            cleanup_interval_seconds: 30,
            gesture_enabled: true,
            game_seed: None,
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key}: {raw}")),
        None => Ok(default),
    }
}
