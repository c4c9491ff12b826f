//! Runtime configuration read from `RIVER_*` environment variables.
//!
//! Unset or unparsable values fall back to their defaults.

use std::env;
use std::time::Duration;

use crate::core::Rules;
use crate::types::{GoalPolicy, DEFAULT_SCROLL_INTERVAL, DEFAULT_TICK_MS};

/// Settings for one invocation of the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Terrain seed. `None` picks a random one at startup.
    pub seed: Option<u64>,
    pub tick_ms: u64,
    pub scroll_interval: u32,
    pub goal: GoalPolicy,
    pub score_on_ascent: bool,
    /// File that receives log records. Logging is off when unset.
    pub log_path: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_ms: DEFAULT_TICK_MS,
            scroll_interval: DEFAULT_SCROLL_INTERVAL,
            goal: GoalPolicy::Endless,
            score_on_ascent: false,
            log_path: None,
        }
    }
}

impl RunConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// `RIVER_LOG_PATH` on its own, so logging can be set up before the
    /// other settings are parsed and their warnings recorded.
    pub fn log_path_from_env() -> Option<String> {
        Self::log_path_from_lookup(|key| env::var(key).ok())
    }

    pub fn log_path_from_lookup<F>(lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup("RIVER_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// Create from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = get("RIVER_SEED").and_then(|s| parse_or_warn("RIVER_SEED", &s));

        let tick_ms = get("RIVER_TICK_MS")
            .and_then(|s| parse_or_warn::<u64>("RIVER_TICK_MS", &s))
            .filter(|&ms| ms > 0)
            .unwrap_or(defaults.tick_ms);

        let scroll_interval = get("RIVER_SCROLL_INTERVAL")
            .and_then(|s| parse_or_warn::<u32>("RIVER_SCROLL_INTERVAL", &s))
            .filter(|&n| n > 0)
            .unwrap_or(defaults.scroll_interval);

        let goal = get("RIVER_GOAL")
            .and_then(|s| {
                let goal = GoalPolicy::from_str(&s);
                if goal.is_none() {
                    log::warn!("ignoring RIVER_GOAL={s:?}; expected \"endless\" or \"top\"");
                }
                goal
            })
            .unwrap_or(defaults.goal);

        let score_on_ascent = get("RIVER_SCORE_ON_ASCENT")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(defaults.score_on_ascent);

        let log_path = Self::log_path_from_lookup(&lookup);

        Self {
            seed,
            tick_ms,
            scroll_interval,
            goal,
            score_on_ascent,
            log_path,
        }
    }

    pub fn rules(&self) -> Rules {
        Rules {
            goal: self.goal,
            scroll_interval: self.scroll_interval,
            score_on_ascent: self.score_on_ascent,
        }
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

fn parse_or_warn<T: std::str::FromStr>(key: &str, value: &str) -> Option<T> {
    let parsed = value.parse().ok();
    if parsed.is_none() {
        log::warn!("ignoring {key}={value:?}; using default");
    }
    parsed
}
