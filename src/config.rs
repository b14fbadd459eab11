//! Configuration types for mail-fetcher

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// How the orchestrator hands work to a fetcher
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// Sequential fetch (default)
    #[default]
    None,
    /// Parallel fetch, if the fetcher decides the workload is worth it
    ConditionalParallel,
    /// Parallel fetch, always
    ForceParallel,
    /// Any mode value this version does not know about
    ///
    /// The orchestrator performs no fetch for this mode and returns an
    /// empty result.
    #[serde(other)]
    Unrecognized,
}

impl ExecutionMode {
    /// Whether this mode routes to [`Fetcher::fetch_parallel`](crate::Fetcher::fetch_parallel)
    pub fn is_parallel(&self) -> bool {
        matches!(
            self,
            ExecutionMode::ConditionalParallel | ExecutionMode::ForceParallel
        )
    }
}

/// Fetch execution policy
///
/// The orchestrator only reads `execution_mode`. The remaining fields are
/// passed through untouched to [`Fetcher::fetch_parallel`](crate::Fetcher::fetch_parallel),
/// which decides what to do with them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Execution mode (default: none)
    #[serde(default)]
    pub execution_mode: ExecutionMode,

    /// Maximum number of concurrent work units inside a parallel fetch (default: 4)
    #[serde(default = "default_max_degree_of_parallelism")]
    pub max_degree_of_parallelism: usize,

    /// Minimum number of work units before `ConditionalParallel` goes parallel (default: 2)
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::default(),
            max_degree_of_parallelism: default_max_degree_of_parallelism(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl FetcherConfig {
    /// Build a default configuration with the given execution mode
    pub fn with_mode(execution_mode: ExecutionMode) -> Self {
        Self {
            execution_mode,
            ..Default::default()
        }
    }

    /// Parse a configuration from JSON and validate it
    ///
    /// Missing fields take their defaults. An unknown `execution_mode` string
    /// parses as [`ExecutionMode::Unrecognized`] rather than failing.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: FetcherConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the parallelism parameters
    pub fn validate(&self) -> Result<()> {
        if self.max_degree_of_parallelism == 0 {
            return Err(Error::config(
                "max_degree_of_parallelism",
                "max_degree_of_parallelism must be at least 1",
            ));
        }
        if self.parallel_threshold == 0 {
            return Err(Error::config(
                "parallel_threshold",
                "parallel_threshold must be at least 1",
            ));
        }
        Ok(())
    }
}

fn default_max_degree_of_parallelism() -> usize {
    4
}

fn default_parallel_threshold() -> usize {
    2
}
