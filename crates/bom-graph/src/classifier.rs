//! Category transitions.
//!
//! A part's category is a function of the roles it has played. Gaining a
//! child and being placed under a parent are the only two events, and each
//! can only move a part forward:
//!
//! | role   | orphan           | component    | subAssembly | topLvlAssembly |
//! |--------|------------------|--------------|-------------|----------------|
//! | parent | topLvlAssembly   | subAssembly  | -           | -              |
//! | child  | component        | -            | -           | subAssembly    |

use crate::graph::{BomGraph, PartId};
use bom_core::{BomError, Category, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The structural role a part just acquired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The part gained a child.
    Parent,

    /// The part was placed under a parent.
    Child,
}

/// What reclassification did to a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    /// The part moved to a new category.
    Promoted { from: Category, to: Category },

    /// The part was already correctly classified.
    Unchanged(Category),
}

impl Transition {
    /// The category the part holds after the transition.
    pub fn category(self) -> Category {
        match self {
            Transition::Promoted { to, .. } => to,
            Transition::Unchanged(category) => category,
        }
    }
}

/// Returns the next category for `current` after acquiring `role`, or
/// `None` when no move is needed.
pub fn next_category(current: Category, role: Role) -> Option<Category> {
    match (role, current) {
        (Role::Parent, Category::Orphan) => Some(Category::TopLevelAssembly),
        (Role::Parent, Category::Component) => Some(Category::SubAssembly),
        (Role::Parent, Category::SubAssembly | Category::TopLevelAssembly) => None,
        (Role::Child, Category::Orphan) => Some(Category::Component),
        (Role::Child, Category::TopLevelAssembly) => Some(Category::SubAssembly),
        (Role::Child, Category::Component | Category::SubAssembly) => None,
    }
}

impl BomGraph {
    /// Applies the transition for `role` to a part, moving it between
    /// classification lists and updating its category together.
    pub(crate) fn reclassify(&mut self, id: PartId, role: Role) -> Result<Transition> {
        let current = self
            .get(id)
            .map(|part| part.category)
            .ok_or_else(|| BomError::IndexIntegrity(format!("part {:?}", id)))?;

        let Some(next) = next_category(current, role) else {
            return Ok(Transition::Unchanged(current));
        };

        self.index.relocate(id, current, next)?;
        self.graph[id].category = next;

        debug!(
            "Reclassified {} as {:?}: {} -> {}",
            self.graph[id].id, role, current, next
        );
        Ok(Transition::Promoted {
            from: current,
            to: next,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_transitions() {
        assert_eq!(
            next_category(Category::Orphan, Role::Parent),
            Some(Category::TopLevelAssembly)
        );
        assert_eq!(
            next_category(Category::Component, Role::Parent),
            Some(Category::SubAssembly)
        );
        assert_eq!(next_category(Category::SubAssembly, Role::Parent), None);
        assert_eq!(next_category(Category::TopLevelAssembly, Role::Parent), None);
    }

    #[test]
    fn test_child_transitions() {
        assert_eq!(
            next_category(Category::Orphan, Role::Child),
            Some(Category::Component)
        );
        assert_eq!(
            next_category(Category::TopLevelAssembly, Role::Child),
            Some(Category::SubAssembly)
        );
        assert_eq!(next_category(Category::Component, Role::Child), None);
        assert_eq!(next_category(Category::SubAssembly, Role::Child), None);
    }

    #[test]
    fn test_never_demotes_to_orphan() {
        for category in Category::ALL {
            for role in [Role::Parent, Role::Child] {
                assert_ne!(next_category(category, role), Some(Category::Orphan));
            }
        }
    }

    #[test]
    fn test_reclassify_moves_between_lists() {
        let mut graph = BomGraph::new();
        graph.create_part("p", "P", "").unwrap();
        let id = graph.get_index("p").unwrap();

        let first = graph.reclassify(id, Role::Child).unwrap();
        assert_eq!(
            first,
            Transition::Promoted {
                from: Category::Orphan,
                to: Category::Component
            }
        );

        let second = graph.reclassify(id, Role::Child).unwrap();
        assert_eq!(second, Transition::Unchanged(Category::Component));

        assert_eq!(graph.list_components().unwrap().len(), 1);
        assert!(graph.list_orphans().unwrap().is_empty());
        graph.check_index().unwrap();
    }
}
