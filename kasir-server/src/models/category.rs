//! Category record

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Record;

/// A product category.
///
/// Categories are not linked to products; the schema has no relation
/// between the two tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(default)]
pub struct Category {
    #[serde(alias = "Id", alias = "ID")]
    pub id: i32,
    #[serde(alias = "Name", alias = "NAME")]
    pub name: String,
    #[serde(alias = "Description", alias = "DESCRIPTION")]
    pub description: String,
}

impl Category {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: description.into(),
        }
    }
}

impl Record for Category {
    const RESOURCE: &'static str = "Kategori";

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_decodes() {
        let c: Category = serde_json::from_str("{}").unwrap();
        assert_eq!(c, Category::default());
    }

    #[test]
    fn capitalized_keys_are_accepted() {
        let c: Category =
            serde_json::from_str(r#"{"Name": "Minuman", "Description": "Dingin"}"#).unwrap();
        assert_eq!(c, Category::new("Minuman", "Dingin"));
    }

    #[test]
    fn body_id_is_carried_but_store_decides() {
        let c: Category = serde_json::from_str(r#"{"id": 42, "name": "Minuman"}"#).unwrap();
        assert_eq!(c.id, 42);
        assert_eq!(c.name, "Minuman");
        assert_eq!(c.description, "");
    }
}
