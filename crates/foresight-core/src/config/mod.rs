pub mod datagen_config;
pub mod query_config;
pub mod selection_config;

pub use datagen_config::DatagenConfig;
pub use query_config::QueryConfig;
pub use selection_config::SelectionConfig;

use serde::{Deserialize, Serialize};

/// Top-level configuration, loadable from a TOML document.
///
/// Every field has a default so a partial (or absent) file is valid; the
/// CLI overlays flag values on top of whatever was loaded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ForesightConfig {
    pub selection: SelectionConfig,
    pub query: QueryConfig,
    pub datagen: DatagenConfig,
}

impl ForesightConfig {
    /// Parse a TOML document.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

/// Default values shared by the config structs.
pub mod defaults {
    /// Feature count the selector aims for.
    pub const DEFAULT_EXPECTED_FEATURES: usize = 9;
    /// Starting percentage for the relevance threshold.
    pub const DEFAULT_START_PERCENTAGE: u32 = 20;
    /// Upper bound on feature-search rounds before the search is declared
    /// non-convergent.
    pub const DEFAULT_MAX_ROUNDS: u32 = 1_000;
    /// Ranked paths included in operator reports.
    pub const DEFAULT_MAX_PATHS: usize = 10;
    /// Traces generated per datagen run.
    pub const DEFAULT_GENERATED_TRACES: usize = 1_000;
    /// Probability (percent) that noise is mixed in after an action.
    pub const DEFAULT_MIX_PROBABILITY: f64 = 100.0;
    /// Noise budget per gap, as a fraction of the noise pool.
    pub const DEFAULT_MAX_BETWEEN_FRACTION: f64 = 0.8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = ForesightConfig::from_toml("").unwrap();
        assert_eq!(
            config.selection.expected_features,
            defaults::DEFAULT_EXPECTED_FEATURES
        );
        assert_eq!(config.query.max_paths, defaults::DEFAULT_MAX_PATHS);
    }

    #[test]
    fn partial_document_overrides_one_section() {
        let config = ForesightConfig::from_toml(
            "[selection]\nexpected_features = 3\nstart_percentage = 50\n",
        )
        .unwrap();
        assert_eq!(config.selection.expected_features, 3);
        assert_eq!(config.selection.start_percentage, 50);
        assert_eq!(config.query.max_paths, defaults::DEFAULT_MAX_PATHS);
    }
}
