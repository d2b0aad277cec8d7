//! Domain types representing bill categories.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// Labels bill activity for display and grouping.
///
/// Categories are owned by the `CategoryManager`; bills reference them by
/// id, so one category may outlive any single bill that points at it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub colour: Colour,
}

impl Category {
    pub fn new(name: impl Into<String>, colour: Colour) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            colour,
        }
    }
}

impl Identifiable for Category {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Category {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.colour)
    }
}

/// RGB colour attached to a category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Colour {
    fn default() -> Self {
        // Mid grey, the colour new categories start with in the UI.
        Self::new(128, 128, 128)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_label_includes_colour() {
        let category = Category::new("Utilities", Colour::new(255, 0, 0));
        assert_eq!(category.display_label(), "Utilities (#ff0000)");
    }

    #[test]
    fn default_colour_is_grey() {
        assert_eq!(Colour::default(), Colour::new(128, 128, 128));
    }
}
