//! Search configuration for the route planner.

/// Configuration parameters for route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Maximum number of options to return per route kind.
    pub max_options: usize,
}

impl PlannerConfig {
    /// Create a new configuration with the given result cap.
    pub fn new(max_options: usize) -> Self {
        Self { max_options }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self { max_options: 3 }
    }
}
