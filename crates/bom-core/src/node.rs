//! Part and category types.
//!
//! A `Part` carries only its identity, opaque metadata and the category the
//! graph has assigned to it. Children are not stored on the part: the graph
//! owns relations, so a part can sit under any number of parents.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The role a part currently plays in the BOM.
///
/// Categories are derived from relation history and only ever advance:
/// `Orphan → Component → SubAssembly` or `Orphan → TopLevelAssembly → SubAssembly`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// Never used as a parent or a child.
    Orphan,

    /// Used as a child, has no children of its own.
    Component,

    /// Has children and is itself used as a child.
    SubAssembly,

    /// Has children and has never been used as a child.
    #[serde(rename = "topLvlAssembly")]
    TopLevelAssembly,
}

impl Category {
    /// All categories, in index order.
    pub const ALL: [Category; 4] = [
        Category::Orphan,
        Category::Component,
        Category::SubAssembly,
        Category::TopLevelAssembly,
    ];

    /// Returns true for sub-assemblies and top-level assemblies.
    pub fn is_assembly(self) -> bool {
        matches!(self, Category::SubAssembly | Category::TopLevelAssembly)
    }

    /// The wire name of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Orphan => "orphan",
            Category::Component => "component",
            Category::SubAssembly => "subAssembly",
            Category::TopLevelAssembly => "topLvlAssembly",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a string does not name a category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "orphan" | "orphans" => Ok(Category::Orphan),
            "component" | "components" => Ok(Category::Component),
            "subassembly" | "subassemblies" | "sub" => Ok(Category::SubAssembly),
            "toplvlassembly" | "toplevelassembly" | "toplevel" | "top" => {
                Ok(Category::TopLevelAssembly)
            }
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

/// A part or assembly in the BOM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Unique identity, fixed at creation.
    pub id: String,

    /// Human-readable name. Not interpreted by the graph.
    pub name: String,

    /// Free-form description. Not interpreted by the graph.
    pub description: String,

    /// Current category, maintained by the graph.
    #[serde(rename = "type")]
    pub category: Category,
}

impl Part {
    /// Creates a new orphan part.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            category: Category::Orphan,
        }
    }
}

/// A read-only snapshot of a part, as returned by traversals.
///
/// Never carries children; it is detached from the graph once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartView {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub category: Category,
}

impl From<&Part> for PartView {
    fn from(part: &Part) -> Self {
        Self {
            id: part.id.clone(),
            name: part.name.clone(),
            description: part.description.clone(),
            category: part.category,
        }
    }
}
