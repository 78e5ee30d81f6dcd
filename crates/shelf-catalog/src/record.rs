//! # Catalog Records
//!
//! The on-disk shape of a catalog and its mapping to `Item`.
//!
//! ## Document Shape
//! ```text
//! JSON                                   TOML
//! ────                                   ────
//! {                                      [[items]]
//!   "items": [                           name = "Apple Pie"
//!     {                                  price = "12"
//!       "name": "Apple Pie",             hashtags = ["sweet", "bakery"]
//!       "price": 12,                     description = "Warm"
//!       "hashtags": ["sweet", "bakery"],
//!       "description": "Warm"
//!     }
//!   ]
//! }
//!
//! YAML
//! ────
//! items:
//!   - name: Apple Pie
//!     price: 12
//!     hashtags: [sweet, bakery]
//!     description: Warm
//! ```
//!
//! `price` may be an integer or a string holding one (`"12"`, `" 12 "`).

use serde::de::{Deserializer, Error as _};
use serde::Deserialize;
use shelf_core::Item;

/// A whole catalog document.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogDocument {
    pub items: Vec<CatalogRecord>,
}

/// One item record as written in the catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogRecord {
    pub name: String,

    #[serde(deserialize_with = "deserialize_price")]
    pub price: i64,

    #[serde(default)]
    pub hashtags: Vec<String>,

    #[serde(default)]
    pub description: String,
}

impl From<CatalogRecord> for Item {
    fn from(record: CatalogRecord) -> Self {
        Item {
            name: record.name,
            price: record.price,
            hashtags: record.hashtags,
            description: record.description,
        }
    }
}

/// Accepts `12` as well as `"12"`.
fn deserialize_price<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(i64),
        Text(String),
    }

    match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(n) => Ok(n),
        RawPrice::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("price '{}' is not an integer", text))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<CatalogRecord, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn test_price_as_number_or_string() {
        let a = parse(r#"{"name": "Tea", "price": 4}"#).unwrap();
        let b = parse(r#"{"name": "Tea", "price": " 4 "}"#).unwrap();
        assert_eq!(a.price, 4);
        assert_eq!(a, b);
    }

    #[test]
    fn test_price_rejects_non_integers() {
        assert!(parse(r#"{"name": "Tea", "price": "four"}"#).is_err());
        assert!(parse(r#"{"name": "Tea", "price": "4.5"}"#).is_err());
        assert!(parse(r#"{"name": "Tea", "price": 4.5}"#).is_err());
        assert!(parse(r#"{"name": "Tea"}"#).is_err());
    }

    #[test]
    fn test_record_into_item_keeps_hashtag_order() {
        let record =
            parse(r#"{"name": "Cake", "price": 9, "hashtags": ["sweet", "bakery", "sweet"]}"#)
                .unwrap();

        let item = Item::from(record);

        assert_eq!(item.hashtags, ["sweet", "bakery", "sweet"]);
        assert_eq!(item.description, "");
    }
}
