//! Core graph data structure.
//!
//! `BomGraph` wraps petgraph and adds the id registry and the classification
//! index. It is the single owner of every part; relations are edges, so a
//! part can be shared by any number of parents.

use crate::config::GraphConfig;
use crate::edge::{Relation, RelationEdge};
use crate::index::ClassificationIndex;
use bom_core::{BomError, Category, Part, Result};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Handle of a part inside the graph.
pub type PartId = NodeIndex;

/// The bill-of-materials graph.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BomGraph {
    /// The underlying petgraph graph.
    pub(crate) graph: DiGraph<Part, Relation>,

    /// Maps string ids to graph node indexes.
    id_index: HashMap<String, PartId>,

    /// Category lists, kept in step with each part's category.
    pub(crate) index: ClassificationIndex,

    #[serde(default)]
    pub(crate) config: GraphConfig,
}

impl BomGraph {
    /// Creates a new empty graph with default configuration.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Creates a new empty graph.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            graph: DiGraph::new(),
            id_index: HashMap::new(),
            index: ClassificationIndex::new(),
            config,
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Registers a new orphan part.
    ///
    /// Fails with `PartAlreadyExists` if the id is taken; the graph is left
    /// untouched in that case.
    pub fn create_part(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<&Part> {
        let id = id.into();
        if self.id_index.contains_key(&id) {
            warn!("Rejected duplicate part id: {}", id);
            return Err(BomError::PartAlreadyExists(id));
        }

        let part = Part::new(id.clone(), name, description);
        let index = self.graph.add_node(part);
        self.id_index.insert(id, index);
        self.index.register(index);

        debug!("Created part {} ({:?})", self.graph[index].id, index);
        Ok(&self.graph[index])
    }

    /// Gets the handle for a string id.
    pub fn get_index(&self, id: &str) -> Option<PartId> {
        self.id_index.get(id).copied()
    }

    /// Gets a part by its string id.
    pub fn part(&self, id: &str) -> Option<&Part> {
        let index = self.id_index.get(id)?;
        self.graph.node_weight(*index)
    }

    /// Gets a part by its handle.
    pub fn get(&self, index: PartId) -> Option<&Part> {
        self.graph.node_weight(index)
    }

    /// Direct children of a part, in the order they were added.
    ///
    /// A child added twice appears twice.
    pub fn children_of(&self, index: PartId) -> Vec<PartId> {
        let mut edges: Vec<_> = self
            .graph
            .edges_directed(index, Direction::Outgoing)
            .map(|edge| (edge.id(), edge.target()))
            .collect();
        edges.sort_by_key(|(edge, _)| *edge);
        edges.into_iter().map(|(_, child)| child).collect()
    }

    /// Returns true if `child` is already a direct child of `parent`.
    pub fn has_child(&self, parent: PartId, child: PartId) -> bool {
        self.graph.contains_edge(parent, child)
    }

    /// Returns the number of parts.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns true if no part has been created.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Returns the number of relations, duplicates included.
    pub fn relation_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterates over all parts in creation order.
    pub fn parts(&self) -> impl Iterator<Item = &Part> {
        self.graph.node_weights()
    }

    /// Returns every relation as parent/child ids, in insertion order.
    pub fn export_relations(&self) -> Vec<RelationEdge> {
        self.graph
            .edge_references()
            .map(|edge_ref| RelationEdge {
                parent: self.graph[edge_ref.source()].id.clone(),
                child: self.graph[edge_ref.target()].id.clone(),
                kind: edge_ref.weight().kind,
            })
            .collect()
    }

    /// Verifies that every part sits in exactly the list matching its
    /// category, and that the all-parts list covers every part once.
    pub fn check_index(&self) -> Result<()> {
        self.index.verify(&self.graph)
    }
}

impl std::ops::Index<PartId> for BomGraph {
    type Output = Part;

    fn index(&self, index: PartId) -> &Part {
        &self.graph[index]
    }
}

/// Graph statistics for status output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub part_count: usize,
    pub relation_count: usize,
    pub orphans: usize,
    pub components: usize,
    pub sub_assemblies: usize,
    pub top_level_assemblies: usize,
}

impl BomGraph {
    /// Returns graph statistics.
    pub fn stats(&self) -> GraphStats {
        let count = |category| self.index.count(category);
        GraphStats {
            part_count: self.len(),
            relation_count: self.relation_count(),
            orphans: count(Category::Orphan),
            components: count(Category::Component),
            sub_assemblies: count(Category::SubAssembly),
            top_level_assemblies: count(Category::TopLevelAssembly),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_part_registers_orphan() {
        let mut graph = BomGraph::new();
        let part = graph.create_part("p1", "Bolt", "M6").unwrap();

        assert_eq!(part.id, "p1");
        assert_eq!(part.category, Category::Orphan);
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.list_orphans().unwrap().len(), 1);
        assert_eq!(graph.list_all_parts().unwrap().len(), 1);
    }

    #[test]
    fn test_duplicate_id_rejected_without_change() {
        let mut graph = BomGraph::new();
        graph.create_part("p1", "Bolt", "M6").unwrap();

        let err = graph.create_part("p1", "Nut", "M6").unwrap_err();
        assert_eq!(err, BomError::PartAlreadyExists("p1".to_string()));

        assert_eq!(graph.len(), 1);
        assert_eq!(graph.part("p1").unwrap().name, "Bolt");
        assert_eq!(graph.list_all_parts().unwrap().len(), 1);
        assert_eq!(graph.list_orphans().unwrap().len(), 1);
        graph.check_index().unwrap();
    }

    #[test]
    fn test_lookup_unknown() {
        let graph = BomGraph::new();
        assert!(graph.part("missing").is_none());
        assert!(graph.get_index("missing").is_none());
        assert!(graph.is_empty());
    }

    #[test]
    fn test_children_in_insertion_order() {
        let mut graph = BomGraph::new();
        for id in ["frame", "a", "b", "c"] {
            graph.create_part(id, id, "").unwrap();
        }
        graph.create_relation("frame", "b").unwrap();
        graph.create_relation("frame", "a").unwrap();
        graph.create_relation("frame", "c").unwrap();

        let frame = graph.get_index("frame").unwrap();
        let ids: Vec<&str> = graph
            .children_of(frame)
            .into_iter()
            .map(|idx| graph[idx].id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_export_and_stats() {
        let mut graph = BomGraph::new();
        for id in ["car", "engine", "piston", "spare"] {
            graph.create_part(id, id, "").unwrap();
        }
        graph.create_relation("car", "engine").unwrap();
        graph.attach_existing("engine", "piston").unwrap();

        let edges = graph.export_relations();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].parent, "car");
        assert_eq!(edges[0].child, "engine");
        assert_eq!(edges[1].parent, "engine");
        // engine was a component when piston was attached, so no redirect
        assert_eq!(edges[1].kind, crate::LinkKind::Attached);

        let stats = graph.stats();
        assert_eq!(stats.part_count, 4);
        assert_eq!(stats.relation_count, 2);
        assert_eq!(stats.orphans, 1);
        assert_eq!(stats.components, 1);
        assert_eq!(stats.sub_assemblies, 1);
        assert_eq!(stats.top_level_assemblies, 1);
    }
}
