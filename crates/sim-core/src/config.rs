//! Configuration System
//!
//! Loads tuning parameters from a TOML file so runs can be adjusted without
//! recompiling. Every section is optional; missing values fall back to the
//! defaults below.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::payoff::PayoffMatrix;
use crate::systems::fate::FateRules;

/// Default tuning file path
pub const DEFAULT_TUNING_PATH: &str = "tuning.toml";

/// Top-level configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub simulation: SimulationConfig,
    pub population: PopulationConfig,
    pub arena: ArenaConfig,
    pub payoffs: PayoffMatrix,
    pub fate: FateRules,
}

/// Run length and seeding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of days to simulate
    pub days: u64,
    /// Seed for the simulation RNG
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { days: 50, seed: 42 }
    }
}

/// Initial head count per species
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    pub hawks: usize,
    pub doves: usize,
    pub grudges: usize,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            hawks: 10,
            doves: 10,
            grudges: 10,
        }
    }
}

impl PopulationConfig {
    pub fn total(&self) -> usize {
        self.hawks + self.doves + self.grudges
    }
}

/// One ring of food pairs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingConfig {
    pub radius: f32,
    pub pairs: usize,
}

/// Arena geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub center_x: f32,
    pub center_y: f32,
    /// Radius of the circle creatures rest on
    pub perimeter_radius: f32,
    /// Distance of each food item from its pair's centre
    pub pair_offset: f32,
    pub rings: Vec<RingConfig>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            center_x: 300.0,
            center_y: 300.0,
            perimeter_radius: 280.0,
            pair_offset: 10.0,
            rings: vec![
                RingConfig { radius: 100.0, pairs: 4 },
                RingConfig { radius: 150.0, pairs: 6 },
                RingConfig { radius: 200.0, pairs: 8 },
            ],
        }
    }
}

impl ArenaConfig {
    pub fn total_pairs(&self) -> usize {
        self.rings.iter().map(|r| r.pairs).sum()
    }
}

impl SimConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from default path, or use defaults if not found
    pub fn load_or_default() -> Self {
        Self::load(DEFAULT_TUNING_PATH).unwrap_or_else(|e| {
            tracing::warn!("Could not load {}: {}. Using defaults.", DEFAULT_TUNING_PATH, e);
            Self::default()
        })
    }

    /// Serialize back to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject configurations that cannot describe a working simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        let arena = &self.arena;
        if arena.total_pairs() == 0 {
            return Err(ConfigError::Invalid("arena has no food pairs".into()));
        }
        if let Some(ring) = arena.rings.iter().find(|r| !(r.radius > 0.0)) {
            return Err(ConfigError::Invalid(format!(
                "ring radius must be positive, got {}",
                ring.radius
            )));
        }
        if !(arena.perimeter_radius > 0.0) {
            return Err(ConfigError::Invalid("perimeter radius must be positive".into()));
        }

        for (name, value) in self.payoffs.entries() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "payoff {} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        self.fate.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.simulation.days, 50);
        assert_eq!(config.population.total(), 30);
        assert_eq!(config.arena.total_pairs(), 18);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = SimConfig::from_str(
            r#"
            [population]
            hawks = 3

            [payoffs]
            hawk_hawk = 0.25
            "#,
        )
        .unwrap();

        assert_eq!(config.population.hawks, 3);
        assert_eq!(config.population.doves, 10);
        assert_eq!(config.payoffs.hawk_hawk, 0.25);
        assert_eq!(config.payoffs.uncontested, 2.0);
        assert_eq!(config.simulation.seed, 42);
    }

    #[test]
    fn test_rings_from_toml() {
        let config = SimConfig::from_str(
            r#"
            [arena]
            rings = [{ radius = 50.0, pairs = 2 }]
            "#,
        )
        .unwrap();
        assert_eq!(config.arena.total_pairs(), 2);
        assert_eq!(config.arena.perimeter_radius, 280.0);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = SimConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(SimConfig::from_str(&text).unwrap(), config);
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = SimConfig::from_str("[population\nhawks = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SimConfig::load("definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_or_default_without_tuning_file() {
        // Tests run from the package directory, which carries no tuning.toml
        assert!(!Path::new(DEFAULT_TUNING_PATH).exists());
        assert_eq!(SimConfig::load_or_default(), SimConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tuning.toml");
        fs::write(&path, "[simulation]\ndays = 7\n").unwrap();

        let config = SimConfig::load(&path).unwrap();
        assert_eq!(config.simulation.days, 7);
    }

    #[test]
    fn test_validate_rejects_empty_arena() {
        let mut config = SimConfig::default();
        config.arena.rings.clear();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_bad_payoff() {
        let mut config = SimConfig::default();
        config.payoffs.dove_vs_hawk = -1.0;
        assert!(config.validate().is_err());

        config.payoffs.dove_vs_hawk = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_radius_ring() {
        let mut config = SimConfig::default();
        config.arena.rings.push(RingConfig { radius: 0.0, pairs: 3 });
        assert!(config.validate().is_err());
    }
}
