//! Relation creation.
//!
//! Two entry points add a parent→child relation. `create_relation` appends
//! unconditionally, so the same child can be listed twice under a parent.
//! `attach_existing` refuses a child that is already listed, and hands an
//! orphan parent over to `create_relation` so a first relation always takes
//! the same path.

use crate::classifier::{Role, Transition};
use crate::edge::{LinkKind, Relation};
use crate::graph::{BomGraph, PartId};
use bom_core::{BomError, Category, Result};
use petgraph::algo::has_path_connecting;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Categories of both endpoints after a relation was added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkOutcome {
    pub parent: Transition,
    pub child: Transition,
}

impl BomGraph {
    /// Adds `child_id` under `parent_id` and reclassifies both parts.
    ///
    /// Duplicate children are not checked here.
    pub fn create_relation(&mut self, parent_id: &str, child_id: &str) -> Result<LinkOutcome> {
        let (parent, child) = self.resolve_pair(parent_id, child_id)?;
        self.link(parent, child, LinkKind::Created)
    }

    /// Adds `child_id` under an existing `parent_id`.
    ///
    /// Fails with `AlreadyChild` if the child is already a direct child. An
    /// orphan parent is routed through [`create_relation`](Self::create_relation).
    pub fn attach_existing(&mut self, parent_id: &str, child_id: &str) -> Result<LinkOutcome> {
        let (parent, child) = self.resolve_pair(parent_id, child_id)?;

        if self.has_child(parent, child) {
            warn!("{} is already a child of {}", child_id, parent_id);
            return Err(BomError::AlreadyChild {
                parent: parent_id.to_string(),
                child: child_id.to_string(),
            });
        }

        if self.graph[parent].category == Category::Orphan {
            return self.create_relation(parent_id, child_id);
        }

        self.link(parent, child, LinkKind::Attached)
    }

    fn resolve_pair(&self, parent_id: &str, child_id: &str) -> Result<(PartId, PartId)> {
        let resolve = |id: &str| {
            self.get_index(id).ok_or_else(|| {
                warn!("Relation references unknown part: {}", id);
                BomError::InvalidPartId(id.to_string())
            })
        };
        Ok((resolve(parent_id)?, resolve(child_id)?))
    }

    /// Returns true if `to` is reachable from `from`, or they are the same part.
    fn reaches(&self, from: PartId, to: PartId) -> bool {
        from == to || has_path_connecting(&self.graph, from, to, None)
    }

    fn link(&mut self, parent: PartId, child: PartId, kind: LinkKind) -> Result<LinkOutcome> {
        // Everything that can fail is checked before the edge goes in.
        self.index.ensure_intact()?;

        if self.config.reject_cycles && self.reaches(child, parent) {
            let (parent_id, child_id) = (&self.graph[parent].id, &self.graph[child].id);
            warn!("Rejected cyclic relation {} -> {}", parent_id, child_id);
            return Err(BomError::CycleDetected {
                parent: parent_id.clone(),
                child: child_id.clone(),
            });
        }

        self.graph.add_edge(parent, child, Relation::new(kind));
        debug!(
            "Linked {} -> {} ({})",
            self.graph[parent].id, self.graph[child].id, kind
        );

        let parent = self.reclassify(parent, Role::Parent)?;
        let child = self.reclassify(child, Role::Child)?;
        Ok(LinkOutcome { parent, child })
    }
}
