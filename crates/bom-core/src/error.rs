//! Error types for BOM operations.

use crate::node::Category;
use thiserror::Error;

/// Errors returned by graph mutations and queries.
///
/// Every error is raised at the first failed precondition, before the graph
/// is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BomError {
    #[error("part already exists: {0}")]
    PartAlreadyExists(String),

    #[error("invalid part id: {0}")]
    InvalidPartId(String),

    #[error("{child} is already a child of {parent}")]
    AlreadyChild { parent: String, child: String },

    #[error("part does not exist: {0}")]
    PartDoesNotExist(String),

    #[error("{id} is not an assembly (category: {category})")]
    NotAnAssembly { id: String, category: Category },

    #[error("cannot find {0}")]
    IndexIntegrity(String),

    #[error("adding {child} under {parent} would create a cycle")]
    CycleDetected { parent: String, child: String },
}

impl BomError {
    /// A stable code for presentation layers.
    pub fn kind(&self) -> &'static str {
        match self {
            BomError::PartAlreadyExists(_) => "part_already_exists",
            BomError::InvalidPartId(_) => "invalid_part_id",
            BomError::AlreadyChild { .. } => "already_child",
            BomError::PartDoesNotExist(_) => "part_does_not_exist",
            BomError::NotAnAssembly { .. } => "not_an_assembly",
            BomError::IndexIntegrity(_) => "index_integrity",
            BomError::CycleDetected { .. } => "cycle_detected",
        }
    }
}

/// Result type for BOM operations.
pub type Result<T> = std::result::Result<T, BomError>;
