//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductFilter, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// The service layer handles validation, business rules, and orchestrates
/// repository operations.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        let product = Product::new(input);
        self.repository.insert(&product).await?;
        Ok(product)
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// List products matching the filter
    #[instrument(skip(self))]
    pub async fn query_products(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        self.repository.find(&filter).await
    }

    /// Partially update an existing product
    ///
    /// Only the fields present in `input` are written; `updated_at` is
    /// stamped with the server clock. Returns the product as stored
    /// after the update.
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        // Fail fast before writing anything
        self.get_product(id).await?;

        let matched = self
            .repository
            .update(id, &input, chrono::Utc::now())
            .await?;
        if matched == 0 {
            // Deleted between the precondition check and the write
            return Err(ProductError::NotFound(id));
        }

        self.get_product(id).await
    }

    /// Delete a product, returning whether a document was removed
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Uuid) -> ProductResult<bool> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(ProductError::NotFound(id));
        }

        let deleted = self.repository.delete(id).await?;
        if deleted == 0 {
            // Deleted concurrently after the existence check
            return Err(ProductError::NotFound(id));
        }
        Ok(deleted > 0)
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
