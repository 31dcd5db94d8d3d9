//! BOM Graph - Bill-of-materials relationship management
//!
//! This crate owns the graph of parts and assemblies. It keeps every part
//! classified as an orphan, component, sub-assembly or top-level assembly as
//! relations are added, and answers "what is inside this assembly" and
//! "what contains this part".
//!
//! # Architecture
//!
//! The graph uses petgraph internally as an arena of parts, with:
//! - An id index resolving string ids to handles (the registry)
//! - A classification index keeping one list per category
//! - Parent→child relations stored as directed edges, in insertion order
//!
//! # Example
//!
//! ```
//! use bom_core::Category;
//! use bom_graph::BomGraph;
//!
//! let mut graph = BomGraph::new();
//! graph.create_part("car", "Car", "Four-door sedan").unwrap();
//! graph.create_part("wheel", "Wheel", "17 inch alloy").unwrap();
//!
//! graph.create_relation("car", "wheel").unwrap();
//!
//! assert_eq!(graph.part("car").unwrap().category, Category::TopLevelAssembly);
//! assert_eq!(graph.part("wheel").unwrap().category, Category::Component);
//! ```

mod classifier;
mod config;
mod edge;
mod graph;
mod index;
mod mutate;
mod query;

pub use classifier::{next_category, Role, Transition};
pub use config::{GraphConfig, Traversal};
pub use edge::{LinkKind, Relation, RelationEdge};
pub use graph::{BomGraph, GraphStats, PartId};
pub use index::ClassificationIndex;
pub use mutate::LinkOutcome;
