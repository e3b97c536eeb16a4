use crate::narration::{CompletionPolicy, DEFAULT_COMPLETION_TIMEOUT};
use crate::speech::{SpeechSettings, DEFAULT_PITCH, DEFAULT_RATE};
use anyhow::{bail, Context, Result};
use std::str::FromStr;
use std::time::Duration;

/// `DATABASE_PATH` value that selects the volatile in-memory store.
pub const IN_MEMORY_DATABASE: &str = ":memory:";

/// Which completion policy the narration manager runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionMode {
    Engine,
    Timed,
    Immediate,
}

impl FromStr for CompletionMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "engine" => Ok(CompletionMode::Engine),
            "timed" => Ok(CompletionMode::Timed),
            "immediate" => Ok(CompletionMode::Immediate),
            other => bail!(
                "Unknown completion policy '{}' (expected engine, timed or immediate)",
                other
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Persistence
    pub database_path: String,

    // Speech engine defaults
    pub speech_rate: f32,
    pub speech_pitch: f32,

    // Narration
    pub completion_mode: CompletionMode,
    pub completion_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let speech_rate = parse_var("SPEECH_RATE", DEFAULT_RATE)?;
        let speech_pitch = parse_var("SPEECH_PITCH", DEFAULT_PITCH)?;
        ensure_positive("SPEECH_RATE", speech_rate)?;
        ensure_positive("SPEECH_PITCH", speech_pitch)?;

        let timeout_ms: u64 = parse_var(
            "NARRATION_TIMEOUT_MS",
            DEFAULT_COMPLETION_TIMEOUT.as_millis() as u64,
        )?;

        Ok(Self {
            // Persistence
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "voice_for_all.db".to_string()),

            // Speech engine defaults
            speech_rate,
            speech_pitch,

            // Narration
            completion_mode: parse_var("NARRATION_COMPLETION", CompletionMode::Engine)?,
            completion_timeout: Duration::from_millis(timeout_ms),
        })
    }

    pub fn uses_memory_store(&self) -> bool {
        self.database_path == IN_MEMORY_DATABASE
    }

    pub fn speech_settings(&self) -> SpeechSettings {
        SpeechSettings {
            rate: self.speech_rate,
            pitch: self.speech_pitch,
        }
    }

    pub fn completion_policy(&self) -> CompletionPolicy {
        match self.completion_mode {
            CompletionMode::Engine => CompletionPolicy::Engine {
                fallback: self.completion_timeout,
            },
            CompletionMode::Timed => CompletionPolicy::Timed(self.completion_timeout),
            CompletionMode::Immediate => CompletionPolicy::Immediate,
        }
    }
}

/// Read `name` from the environment, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{}", e))
            .with_context(|| format!("Invalid {} value '{}'", name, raw)),
        Err(_) => Ok(default),
    }
}

fn ensure_positive(name: &str, value: f32) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        bail!("{} must be a positive number, got {}", name, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        "DATABASE_PATH",
        "SPEECH_RATE",
        "SPEECH_PITCH",
        "NARRATION_COMPLETION",
        "NARRATION_TIMEOUT_MS",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    // ==================== Default Tests ====================

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().expect("Defaults should load");

        assert_eq!(config.database_path, "voice_for_all.db");
        assert!(!config.uses_memory_store());
        assert_eq!(config.speech_settings(), SpeechSettings::default());
        assert_eq!(config.completion_policy(), CompletionPolicy::default());
    }

    // ==================== Override Tests ====================

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        std::env::set_var("DATABASE_PATH", ":memory:");
        std::env::set_var("SPEECH_RATE", "0.75");
        std::env::set_var("SPEECH_PITCH", " 1.25 ");
        std::env::set_var("NARRATION_COMPLETION", "Timed");
        std::env::set_var("NARRATION_TIMEOUT_MS", "3000");

        let config = Config::from_env().expect("Overrides should load");
        clear_env();

        assert!(config.uses_memory_store());
        assert_eq!(config.speech_rate, 0.75);
        assert_eq!(config.speech_pitch, 1.25);
        assert_eq!(
            config.completion_policy(),
            CompletionPolicy::Timed(Duration::from_secs(3))
        );
    }

    #[test]
    #[serial]
    fn test_immediate_policy() {
        clear_env();
        std::env::set_var("NARRATION_COMPLETION", "immediate");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.completion_policy(), CompletionPolicy::Immediate);
    }

    // ==================== Validation Tests ====================

    #[test]
    #[serial]
    fn test_unknown_policy_is_rejected() {
        clear_env();
        std::env::set_var("NARRATION_COMPLETION", "sometimes");

        let err = Config::from_env().unwrap_err();
        clear_env();

        assert!(format!("{:#}", err).contains("NARRATION_COMPLETION"));
    }

    #[test]
    #[serial]
    fn test_non_numeric_rate_is_rejected() {
        clear_env();
        std::env::set_var("SPEECH_RATE", "fast");

        let result = Config::from_env();
        clear_env();

        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_non_positive_values_are_rejected() {
        for (var, value) in [("SPEECH_RATE", "0"), ("SPEECH_PITCH", "-1"), ("SPEECH_RATE", "NaN")] {
            clear_env();
            std::env::set_var(var, value);

            let result = Config::from_env();
            clear_env();

            assert!(result.is_err(), "{}={} should be rejected", var, value);
        }
    }

    #[test]
    #[serial]
    fn test_negative_timeout_is_rejected() {
        clear_env();
        std::env::set_var("NARRATION_TIMEOUT_MS", "-5");

        let result = Config::from_env();
        clear_env();

        assert!(result.is_err());
    }

    #[test]
    fn test_completion_mode_parsing() {
        assert_eq!("ENGINE".parse::<CompletionMode>().unwrap(), CompletionMode::Engine);
        assert!("".parse::<CompletionMode>().is_err());
    }
}
