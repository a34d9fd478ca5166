use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Product entity - represents a product stored in MongoDB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
}

/// DTO for partially updating an existing product
///
/// Absent fields are left untouched; `updated_at` is always set by the
/// server, never by the caller.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
}

impl UpdateProduct {
    /// Whether any field is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }
}

/// Query filters for listing products
///
/// The price bounds are exclusive and always applied; when the caller
/// omits them the listing covers the (5000, 8000) price band.
#[derive(Debug, Clone, Deserialize, PartialEq, ToSchema, IntoParams)]
pub struct ProductFilter {
    /// Exclusive lower price bound
    #[serde(default = "default_min_price", alias = "minPrice")]
    pub min_price: f64,
    /// Exclusive upper price bound
    #[serde(default = "default_max_price", alias = "maxPrice")]
    pub max_price: f64,
    /// Exact name match
    pub name: Option<String>,
}

fn default_min_price() -> f64 {
    5000.0
}

fn default_max_price() -> f64 {
    8000.0
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            min_price: default_min_price(),
            max_price: default_max_price(),
            name: None,
        }
    }
}

impl Product {
    /// Create a new product from CreateProduct DTO
    pub fn new(input: CreateProduct) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            price: input.price,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_new_sets_timestamps() {
        let product = Product::new(CreateProduct {
            name: "Iphone 14 Pro Max".to_string(),
            price: 8500.0,
        });

        assert_eq!(product.name, "Iphone 14 Pro Max");
        assert_eq!(product.price, 8500.0);
        assert_eq!(product.created_at, product.updated_at);
        assert!(!product.id.is_nil());
    }

    #[test]
    fn test_product_ids_are_unique() {
        let input = CreateProduct {
            name: "Widget".to_string(),
            price: 1.0,
        };
        let a = Product::new(input.clone());
        let b = Product::new(input);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_product_serializes_id_as_underscore_id() {
        let product = Product::new(CreateProduct {
            name: "Widget".to_string(),
            price: 9.99,
        });

        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("_id").is_some());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_create_product_validation() {
        let valid = CreateProduct {
            name: "Widget".to_string(),
            price: 0.0,
        };
        assert!(valid.validate().is_ok());

        let empty_name = CreateProduct {
            name: String::new(),
            price: 10.0,
        };
        assert!(empty_name.validate().is_err());

        let negative_price = CreateProduct {
            name: "Widget".to_string(),
            price: -1.0,
        };
        assert!(negative_price.validate().is_err());
    }

    #[test]
    fn test_update_product_is_empty() {
        assert!(UpdateProduct::default().is_empty());
        assert!(!UpdateProduct {
            price: Some(7500.0),
            ..Default::default()
        }
        .is_empty());
    }

    #[test]
    fn test_filter_defaults() {
        let filter: ProductFilter = serde_json::from_str("{}").unwrap();
        assert_eq!(filter.min_price, 5000.0);
        assert_eq!(filter.max_price, 8000.0);
        assert_eq!(filter.name, None);
    }

    #[test]
    fn test_filter_camel_case_aliases() {
        let filter: ProductFilter =
            serde_json::from_str(r#"{"minPrice": 100.0, "maxPrice": 200.0}"#).unwrap();
        assert_eq!(filter.min_price, 100.0);
        assert_eq!(filter.max_price, 200.0);
    }

    #[test]
    fn test_filter_snake_case_fields() {
        let filter: ProductFilter =
            serde_json::from_str(r#"{"min_price": 1.0, "max_price": 2.0, "name": "Widget"}"#)
                .unwrap();
        assert_eq!(filter.min_price, 1.0);
        assert_eq!(filter.max_price, 2.0);
        assert_eq!(filter.name.as_deref(), Some("Widget"));
    }
}
