//! Lab configuration management.
//!
//! Handles loading of the optional TOML configuration file with
//! environment variable override support. Every field has a default, so a
//! missing file or an empty one reproduces the stock demonstrations.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use limit_models::DistributionKind;
use limit_sim::clt::{CltConfig, DEFAULT_BINS, DEFAULT_SAMPLE_SIZES, DEFAULT_TRIALS};
use limit_sim::pi::{PiConfig, DEFAULT_POINTS};
use limit_sim::slln::{SllnConfig, DEFAULT_SLLN_SAMPLES};
use limit_sim::{DEFAULT_SEED, DEFAULT_TOLERANCE, MAX_SAMPLES};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "limitlab.toml";

/// Values given on the command line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    /// `--results-dir`
    pub results_dir: Option<PathBuf>,
    /// `--seed`
    pub seed: Option<u64>,
    /// `--verbose` forces the `debug` log level
    pub verbose: bool,
}

/// SLLN settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SllnSection {
    /// Samples per distribution
    pub samples: usize,
    /// Convergence tolerance
    pub tolerance: f64,
}

impl Default for SllnSection {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SLLN_SAMPLES,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// CLT settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CltSection {
    /// Sample sizes n
    pub sample_sizes: Vec<usize>,
    /// Trials m per sample size
    pub trials: usize,
    /// Histogram bins
    pub bins: usize,
    /// Distribution name or alias
    pub distribution: String,
}

impl Default for CltSection {
    fn default() -> Self {
        Self {
            sample_sizes: DEFAULT_SAMPLE_SIZES.to_vec(),
            trials: DEFAULT_TRIALS,
            bins: DEFAULT_BINS,
            distribution: DistributionKind::Uniform.name().to_string(),
        }
    }
}

/// Monte Carlo π settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PiSection {
    /// Random points
    pub points: usize,
    /// Tolerance for the convergence index
    pub tolerance: f64,
}

impl Default for PiSection {
    fn default() -> Self {
        Self {
            points: DEFAULT_POINTS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Lab configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LabConfig {
    /// Results directory for figures
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,

    /// Reports directory created by `setup`
    #[serde(default = "default_reports_dir")]
    pub reports_dir: PathBuf,

    /// Seed shared by every simulation
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Samples printed per distribution by `moments --preview`
    #[serde(default = "default_preview_count")]
    pub preview_count: usize,

    /// SLLN settings
    #[serde(default)]
    pub slln: SllnSection,

    /// CLT settings
    #[serde(default)]
    pub clt: CltSection,

    /// Monte Carlo π settings
    #[serde(default)]
    pub pi: PiSection,
}

fn default_results_dir() -> PathBuf {
    PathBuf::from("results")
}

fn default_reports_dir() -> PathBuf {
    PathBuf::from("reports")
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_preview_count() -> usize {
    5
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            results_dir: default_results_dir(),
            reports_dir: default_reports_dir(),
            seed: default_seed(),
            log_level: default_log_level(),
            preview_count: default_preview_count(),
            slln: SllnSection::default(),
            clt: CltSection::default(),
            pi: PiSection::default(),
        }
    }
}

impl LabConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or the defaults when it does not exist
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    ///
    /// Unparseable numeric values are ignored.
    pub fn with_env_override(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply `LIMITLAB_*` overrides read through `lookup`
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(results_dir) = lookup("LIMITLAB_RESULTS_DIR") {
            self.results_dir = PathBuf::from(results_dir);
        }

        if let Some(seed) = lookup("LIMITLAB_SEED") {
            self.seed = seed.parse().unwrap_or(self.seed);
        }

        if let Some(log_level) = lookup("LIMITLAB_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(samples) = lookup("LIMITLAB_SAMPLES") {
            self.slln.samples = samples.parse().unwrap_or(self.slln.samples);
        }

        self
    }

    /// Apply command-line overrides, which take precedence over the
    /// environment and the file
    pub fn with_cli_override(mut self, overrides: &CliOverrides) -> Self {
        if let Some(results_dir) = &overrides.results_dir {
            self.results_dir = results_dir.clone();
        }
        if let Some(seed) = overrides.seed {
            self.seed = seed;
        }
        if overrides.verbose {
            self.log_level = "debug".to_string();
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if self.results_dir.as_os_str().is_empty() {
            errors.push("results_dir cannot be empty".to_string());
        }

        check_count(&mut errors, "slln.samples", self.slln.samples);
        check_count(&mut errors, "pi.points", self.pi.points);
        check_count(&mut errors, "preview_count", self.preview_count);
        check_tolerance(&mut errors, "slln.tolerance", self.slln.tolerance);
        check_tolerance(&mut errors, "pi.tolerance", self.pi.tolerance);

        if self.clt.sample_sizes.is_empty() {
            errors.push("clt.sample_sizes cannot be empty".to_string());
        }
        if self.clt.sample_sizes.contains(&0) {
            errors.push("clt.sample_sizes must all be greater than 0".to_string());
        }
        if self.clt.trials < 2 {
            errors.push(format!(
                "clt.trials {} is too small (at least 2 required)",
                self.clt.trials
            ));
        }
        if self.clt.bins == 0 {
            errors.push("clt.bins must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from `path` (or defaults), apply environment then command-line
    /// overrides, and validate the result
    pub fn load_with_env_and_validate(
        path: &Path,
        overrides: &CliOverrides,
    ) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?
            .with_env_override()
            .with_cli_override(overrides);
        config.validate()?;
        Ok(config)
    }

    /// SLLN simulator configuration
    pub fn slln_config(&self) -> Result<SllnConfig, limit_sim::ConfigError> {
        SllnConfig::builder()
            .n_samples(self.slln.samples)
            .tolerance(self.slln.tolerance)
            .seed(self.seed)
            .build()
    }

    /// CLT simulator configuration
    pub fn clt_config(&self) -> Result<CltConfig, limit_sim::ConfigError> {
        CltConfig::builder()
            .sample_sizes(self.clt.sample_sizes.clone())
            .trials(self.clt.trials)
            .histogram_bins(self.clt.bins)
            .seed(self.seed)
            .build()
    }

    /// π estimator configuration
    pub fn pi_config(&self) -> Result<PiConfig, limit_sim::ConfigError> {
        PiConfig::builder()
            .n_points(self.pi.points)
            .tolerance(self.pi.tolerance)
            .seed(self.seed)
            .build()
    }
}

fn check_count(errors: &mut Vec<String>, name: &str, value: usize) {
    if value == 0 {
        errors.push(format!("{} must be greater than 0", name));
    } else if value > MAX_SAMPLES {
        errors.push(format!(
            "{} {} exceeds maximum allowed ({})",
            name, value, MAX_SAMPLES
        ));
    }
}

fn check_tolerance(errors: &mut Vec<String>, name: &str, value: f64) {
    if !value.is_finite() || value <= 0.0 {
        errors.push(format!("{} must be finite and positive, got {}", name, value));
    }
}

/// Configuration error type
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// IO error reading config file
    Io(String),
    /// Parse error in config file
    Parse(String),
    /// Validation error
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {}", msg),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
            Self::Validation(errors) => write!(f, "Validation errors: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {}
