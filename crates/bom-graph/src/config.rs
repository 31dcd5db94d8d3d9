//! Graph configuration.
//!
//! The defaults reproduce the plain behaviour: traversals report a shared
//! part once per path that reaches it, and relations are never checked for
//! cycles.

use serde::{Deserialize, Serialize};

/// How descendant traversal treats a part reachable through several paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Traversal {
    /// Report a part once for every path that reaches it.
    #[default]
    Multiplicity,

    /// Report every part at most once.
    Distinct,
}

/// Options for a [`BomGraph`](crate::BomGraph).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Revisit policy for `descendants_of`.
    pub traversal: Traversal,

    /// Refuse relations that would make a part its own descendant.
    pub reject_cycles: bool,
}

impl GraphConfig {
    /// Sets the traversal policy.
    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    /// Enables or disables cycle rejection.
    pub fn with_reject_cycles(mut self, reject: bool) -> Self {
        self.reject_cycles = reject;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let config: GraphConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GraphConfig::default());
        assert_eq!(config.traversal, Traversal::Multiplicity);
        assert!(!config.reject_cycles);
    }

    #[test]
    fn test_partial_json() {
        let config: GraphConfig = serde_json::from_str(r#"{"traversal": "distinct"}"#).unwrap();
        assert_eq!(config.traversal, Traversal::Distinct);
        assert!(!config.reject_cycles);
    }
}
