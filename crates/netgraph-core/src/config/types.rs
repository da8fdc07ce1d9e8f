//! Configuration type definitions

use crate::graph::EulerOptions;
use serde::{Deserialize, Serialize};

/// Analysis configuration, read from `config.toml`
///
/// ```toml
/// [euler]
/// strategy = "backtracking"
/// max_attempts = 500
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Eulerian walk construction options
    #[serde(default)]
    pub euler: EulerOptions,
}
