//! Product record

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Record;

/// A product in the inventory.
///
/// Serialized with the API's wire names (`nama`, `harga`, `stok`).
/// Capitalized and upper-case keys are accepted on input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(default)]
pub struct Product {
    #[serde(alias = "Id", alias = "ID")]
    pub id: i32,
    #[serde(rename = "nama", alias = "Nama", alias = "NAMA")]
    pub name: String,
    /// Price in the smallest currency unit
    #[serde(rename = "harga", alias = "Harga", alias = "HARGA")]
    pub price: i32,
    #[serde(rename = "stok", alias = "Stok", alias = "STOK")]
    pub stock: i32,
}

impl Product {
    pub fn new(name: impl Into<String>, price: i32, stock: i32) -> Self {
        Self {
            id: 0,
            name: name.into(),
            price,
            stock,
        }
    }
}

impl Record for Product {
    const RESOURCE: &'static str = "Produk";

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

/// Products available when the server runs without a database.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Indomie Goreng".into(),
            price: 3500,
            stock: 100,
        },
        Product {
            id: 2,
            name: "Teh Botol".into(),
            price: 3000,
            stock: 50,
        },
        Product {
            id: 3,
            name: "Kecap Bango".into(),
            price: 12000,
            stock: 20,
        },
    ]
}
