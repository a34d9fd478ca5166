use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{Product, ProductFilter, UpdateProduct};

/// Repository trait for Product persistence
///
/// Data access interface for products. The MongoDB implementation lives
/// in [`crate::mongodb`]; tests use a generated mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product document
    async fn insert(&self, product: &Product) -> ProductResult<()>;

    /// Fetch a product by ID
    async fn find_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// List products matching the filter
    async fn find(&self, filter: &ProductFilter) -> ProductResult<Vec<Product>>;

    /// Apply a partial update, stamping `updated_at`
    ///
    /// Returns the number of documents matched by the ID (0 or 1). A
    /// match with no field changes still counts.
    async fn update(
        &self,
        id: Uuid,
        changes: &UpdateProduct,
        updated_at: DateTime<Utc>,
    ) -> ProductResult<u64>;

    /// Delete a product by ID, returning the number of documents removed
    async fn delete(&self, id: Uuid) -> ProductResult<u64>;
}
