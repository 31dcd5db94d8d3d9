//! BOM Core - Parts, categories and errors
//!
//! This crate holds the data model shared by the BOM graph and anything that
//! presents it. A part and an assembly are the same entity; what tells them
//! apart is the [`Category`] the graph assigns from the part's role in
//! parent/child relations.
//!
//! # Example
//!
//! ```
//! use bom_core::{Category, Part, PartView};
//!
//! let wheel = Part::new("wheel-01", "Wheel", "17 inch alloy");
//! assert_eq!(wheel.category, Category::Orphan);
//!
//! let view = PartView::from(&wheel);
//! assert_eq!(view.id, "wheel-01");
//! ```

pub mod error;
pub mod node;

pub use error::{BomError, Result};
pub use node::{Category, ParseCategoryError, Part, PartView};
