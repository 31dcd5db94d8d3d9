//! Classification index.
//!
//! Keeps an ordered list of part handles per category plus a list of every
//! part ever created. It holds no graph logic: the classifier decides when a
//! part moves, this module only does the bookkeeping.

use crate::edge::Relation;
use crate::graph::PartId;
use bom_core::{BomError, Category, Part, Result};
use petgraph::graph::DiGraph;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Per-category lists of parts.
///
/// Each part is in exactly one category list, the one matching its
/// `category` field. The all-parts list only grows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationIndex {
    /// Every part, in creation order.
    all: Vec<PartId>,

    /// One list per category, in the order parts entered it.
    by_category: HashMap<Category, Vec<PartId>>,
}

impl Default for ClassificationIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassificationIndex {
    /// Creates an index with an empty list for each category.
    pub fn new() -> Self {
        Self {
            all: Vec::new(),
            by_category: Category::ALL
                .iter()
                .map(|&category| (category, Vec::new()))
                .collect(),
        }
    }

    /// Records a newly created part as an orphan.
    pub(crate) fn register(&mut self, id: PartId) {
        self.all.push(id);
        self.by_category
            .entry(Category::Orphan)
            .or_default()
            .push(id);
    }

    /// Returns the list for a category, or every part for `None`.
    pub fn list(&self, category: Option<Category>) -> Result<&[PartId]> {
        match category {
            None => Ok(&self.all),
            Some(category) => self
                .by_category
                .get(&category)
                .map(Vec::as_slice)
                .ok_or_else(|| BomError::IndexIntegrity(category.to_string())),
        }
    }

    /// Number of parts currently in a category.
    pub fn count(&self, category: Category) -> usize {
        self.by_category.get(&category).map_or(0, Vec::len)
    }

    /// Fails if any category list is missing.
    pub(crate) fn ensure_intact(&self) -> Result<()> {
        for category in Category::ALL {
            self.list(Some(category))?;
        }
        Ok(())
    }

    /// Moves a part from one category list to the end of another.
    ///
    /// Both lists are checked before either is touched.
    pub(crate) fn relocate(&mut self, id: PartId, from: Category, to: Category) -> Result<()> {
        self.list(Some(from))?;
        self.list(Some(to))?;

        if let Some(list) = self.by_category.get_mut(&from) {
            list.retain(|&existing| existing != id);
        }
        if let Some(list) = self.by_category.get_mut(&to) {
            list.push(id);
        }
        Ok(())
    }

    /// Checks the index against the parts stored in `graph`.
    pub(crate) fn verify(&self, graph: &DiGraph<Part, Relation>) -> Result<()> {
        self.ensure_intact()?;

        let unique: HashSet<PartId> = self.all.iter().copied().collect();
        if unique.len() != self.all.len() || self.all.len() != graph.node_count() {
            return Err(BomError::IndexIntegrity("parts".to_string()));
        }

        for index in graph.node_indices() {
            let part = &graph[index];
            for category in Category::ALL {
                let occurrences = self
                    .list(Some(category))?
                    .iter()
                    .filter(|&&id| id == index)
                    .count();
                let expected = usize::from(part.category == category);
                if occurrences != expected {
                    return Err(BomError::IndexIntegrity(format!(
                        "{} in {} list",
                        part.id, category
                    )));
                }
            }
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn drop_list(&mut self, category: Category) {
        self.by_category.remove(&category);
    }
}
