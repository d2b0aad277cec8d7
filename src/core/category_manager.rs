//! Flat name-indexed registry over bill categories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::category::{Category, Colour};
use crate::errors::{BalanceError, Result};

/// Owns every [`Category`] in the book. Mirrors the
/// [`PersonManager`](crate::core::PersonManager) contract: first-match
/// name lookups, hard-miss identity removal, soft no-op name removal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryManager {
    pub categories: Vec<Category>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CategoryManager {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            categories: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn add_category(&mut self, category: Category) -> Uuid {
        let id = category.id;
        tracing::debug!(category = %category.name, "adding category");
        self.categories.push(category);
        self.touch();
        id
    }

    pub fn add_category_by_name(&mut self, name: impl Into<String>, colour: Colour) -> Uuid {
        self.add_category(Category::new(name, colour))
    }

    /// Removes the category identified by `id`. Hard miss on absent ids.
    /// Bills referencing the category keep their dangling id.
    pub fn remove_category(&mut self, id: Uuid) -> Result<Category> {
        let index = self
            .categories
            .iter()
            .position(|category| category.id == id)
            .ok_or_else(|| BalanceError::CategoryNotFound(id.to_string()))?;
        let category = self.categories.remove(index);
        tracing::debug!(category = %category.name, "removed category");
        self.touch();
        Ok(category)
    }

    /// Removes the first category whose name matches. A miss is a no-op.
    pub fn remove_category_by_name(&mut self, name: &str) -> bool {
        match self
            .categories
            .iter()
            .position(|category| category.name == name)
        {
            Some(index) => {
                self.categories.remove(index);
                tracing::debug!(category = name, "removed category by name");
                self.touch();
                true
            }
            None => false,
        }
    }

    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.name == name)
    }

    pub fn category(&self, id: Uuid) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn category_mut(&mut self, id: Uuid) -> Option<&mut Category> {
        self.categories.iter_mut().find(|category| category.id == id)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for CategoryManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn added_category_is_retrievable_by_name() {
        let mut manager = CategoryManager::new();
        manager.add_category_by_name("Utilities", Colour::new(0, 128, 255));

        let category = manager.category_by_name("Utilities").expect("category");
        assert_eq!(category.colour, Colour::new(0, 128, 255));
    }

    #[test]
    fn remove_category_misses_hard() {
        let mut manager = CategoryManager::new();
        let err = manager
            .remove_category(Uuid::new_v4())
            .expect_err("absent id must be a hard miss");
        assert!(matches!(err, BalanceError::CategoryNotFound(_)));
    }

    #[test]
    fn remove_by_name_is_a_no_op_on_miss() {
        let mut manager = CategoryManager::new();
        assert!(!manager.remove_category_by_name("Ghost"));
    }

    #[test]
    fn instances_never_share_state() {
        let mut left = CategoryManager::new();
        let right = CategoryManager::new();

        left.add_category_by_name("Bills", Colour::default());
        assert!(right.categories().is_empty());
    }
}
