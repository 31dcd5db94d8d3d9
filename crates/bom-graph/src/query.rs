//! Read-only queries over the BOM.
//!
//! Listings come straight from the classification index. Traversals walk the
//! graph from scratch on every call with an explicit stack, so siblings come
//! out last-added first.
//!
//! A walk never follows an edge back into a part that is already on the
//! branch being explored, so cyclic BOMs terminate. Under
//! [`Traversal::Multiplicity`] a part shared by two sub-trees is reported
//! once per path; under [`Traversal::Distinct`] it is reported once.

use crate::config::Traversal;
use crate::graph::{BomGraph, PartId};
use bom_core::{BomError, Category, Part, PartView, Result};
use std::collections::HashSet;
use tracing::debug;

impl BomGraph {
    /// Lists the parts in a category, or every part for `None`.
    pub fn list(&self, category: Option<Category>) -> Result<Vec<&Part>> {
        Ok(self.resolve_all(self.index.list(category)?))
    }

    pub fn list_all_parts(&self) -> Result<Vec<&Part>> {
        self.list(None)
    }

    pub fn list_components(&self) -> Result<Vec<&Part>> {
        self.list(Some(Category::Component))
    }

    pub fn list_orphans(&self) -> Result<Vec<&Part>> {
        self.list(Some(Category::Orphan))
    }

    pub fn list_top_level_assemblies(&self) -> Result<Vec<&Part>> {
        self.list(Some(Category::TopLevelAssembly))
    }

    pub fn list_sub_assemblies(&self) -> Result<Vec<&Part>> {
        self.list(Some(Category::SubAssembly))
    }

    /// Lists top-level assemblies followed by sub-assemblies.
    pub fn list_assemblies(&self) -> Result<Vec<&Part>> {
        Ok(self.resolve_all(&self.assembly_ids()?))
    }

    /// Every part below an assembly, as detached snapshots.
    ///
    /// Fails with `PartDoesNotExist` for an unknown id and `NotAnAssembly`
    /// for an orphan or component.
    pub fn descendants_of(&self, assembly_id: &str) -> Result<Vec<PartView>> {
        let root = self.assembly(assembly_id)?;
        let found = self.walk_descendants(root);
        debug!("{} descendants under {}", found.len(), assembly_id);

        Ok(found
            .into_iter()
            .map(|id| PartView::from(&self.graph[id]))
            .collect())
    }

    /// The immediate children of an assembly, in the order they were added.
    pub fn direct_children_of(&self, assembly_id: &str) -> Result<Vec<&Part>> {
        let root = self.assembly(assembly_id)?;
        Ok(self.resolve_all(&self.children_of(root)))
    }

    /// Every assembly with `part_id` somewhere below it.
    ///
    /// Orphans and top-level assemblies are never contained, so they yield an
    /// empty list. Each assembly is reported at most once, however many
    /// times the part occurs under it.
    pub fn containing_assemblies_of(&self, part_id: &str) -> Result<Vec<PartView>> {
        let target = self
            .get_index(part_id)
            .ok_or_else(|| BomError::PartDoesNotExist(part_id.to_string()))?;

        if matches!(
            self.graph[target].category,
            Category::Orphan | Category::TopLevelAssembly
        ) {
            return Ok(Vec::new());
        }

        let containing: Vec<PartView> = self
            .assembly_ids()?
            .into_iter()
            .filter(|&assembly| self.subtree_contains(assembly, target))
            .map(|assembly| PartView::from(&self.graph[assembly]))
            .collect();

        debug!("{} assemblies contain {}", containing.len(), part_id);
        Ok(containing)
    }

    fn resolve_all(&self, ids: &[PartId]) -> Vec<&Part> {
        ids.iter().filter_map(|&id| self.get(id)).collect()
    }

    fn assembly_ids(&self) -> Result<Vec<PartId>> {
        let top = self.index.list(Some(Category::TopLevelAssembly))?;
        let sub = self.index.list(Some(Category::SubAssembly))?;
        Ok(top.iter().chain(sub).copied().collect())
    }

    fn assembly(&self, id: &str) -> Result<PartId> {
        let index = self
            .get_index(id)
            .ok_or_else(|| BomError::PartDoesNotExist(id.to_string()))?;

        let category = self.graph[index].category;
        if !category.is_assembly() {
            return Err(BomError::NotAnAssembly {
                id: id.to_string(),
                category,
            });
        }
        Ok(index)
    }

    /// Depth-first walk below `root`, in visit order.
    fn walk_descendants(&self, root: PartId) -> Vec<PartId> {
        let distinct = self.config.traversal == Traversal::Distinct;
        let mut result = Vec::new();
        let mut visited = HashSet::new();

        // path[d] is the part at depth d on the current branch
        let mut path = vec![root];
        let mut stack: Vec<(PartId, usize)> = self
            .children_of(root)
            .into_iter()
            .map(|child| (child, 1))
            .collect();

        while let Some((current, depth)) = stack.pop() {
            path.truncate(depth);
            if path.contains(&current) {
                continue;
            }
            if distinct && !visited.insert(current) {
                continue;
            }

            result.push(current);
            path.push(current);
            stack.extend(
                self.children_of(current)
                    .into_iter()
                    .map(|child| (child, depth + 1)),
            );
        }

        result
    }

    /// Returns true if `target` is reachable below `root`.
    fn subtree_contains(&self, root: PartId, target: PartId) -> bool {
        let mut visited = HashSet::new();
        let mut stack = self.children_of(root);

        while let Some(current) = stack.pop() {
            if current == target {
                return true;
            }
            if visited.insert(current) {
                stack.extend(self.children_of(current));
            }
        }
        false
    }
}
