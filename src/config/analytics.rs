//! Analytics configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analytics::DEFAULT_TOP_N;

/// Dashboard analytics settings
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsConfig {
    /// How many ventures the top-N rankings show
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl AnalyticsConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.top_n == 0 {
            return Err(ValidationError::InvalidTopN);
        }
        Ok(())
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
        }
    }
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}
