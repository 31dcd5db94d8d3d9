//! Edge types for the BOM graph.
//!
//! Every edge is a parent→child relation. The edge remembers which entry
//! point created it so exports can tell a first assembly from a later
//! attachment.

use serde::{Deserialize, Serialize};

/// The operation that produced a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// Added by `create_relation` (including redirected orphan attachments).
    Created,

    /// Added by `attach_existing` under an existing assembly.
    Attached,
}

impl std::fmt::Display for LinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Created => "created",
            Self::Attached => "attached",
        };
        write!(f, "{}", s)
    }
}

/// A parent→child edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relation {
    pub kind: LinkKind,
}

impl Relation {
    /// Creates a new relation.
    pub fn new(kind: LinkKind) -> Self {
        Self { kind }
    }
}

/// A simplified relation for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationEdge {
    pub parent: String,
    pub child: String,
    pub kind: LinkKind,
}
