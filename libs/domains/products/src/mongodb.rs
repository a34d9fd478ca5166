//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::{
    bson::{doc, to_bson, Bson, Document},
    options::IndexOptions,
    Collection, Database, IndexModel,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductFilter, UpdateProduct};
use crate::repository::ProductRepository;

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository backed by the `products` collection
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Product>("products");
        Self { collection }
    }

    /// Create a new MongoProductRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    /// Initialize indexes for optimal query performance
    pub async fn init_indexes(&self) -> ProductResult<()> {
        let indexes = vec![
            // Price range queries from the listing endpoint
            IndexModel::builder()
                .keys(doc! { "price": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_price".to_string())
                        .build(),
                )
                .build(),
            // Exact name lookups
            IndexModel::builder()
                .keys(doc! { "name": 1 })
                .options(IndexOptions::builder().name("idx_name".to_string()).build())
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Product indexes created successfully");
        Ok(())
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Product> {
        &self.collection
    }

    /// Build a MongoDB filter document from ProductFilter
    ///
    /// Price bounds are exclusive.
    fn build_filter(filter: &ProductFilter) -> Document {
        let mut doc = doc! {
            "price": { "$gt": filter.min_price, "$lt": filter.max_price }
        };

        if let Some(ref name) = filter.name {
            doc.insert("name", name);
        }

        doc
    }

    /// Build a `$set` document from the fields present in the update
    fn build_update(changes: &UpdateProduct, updated_at: DateTime<Utc>) -> Document {
        let mut set = doc! { "updated_at": updated_at.to_rfc3339() };

        if let Some(ref name) = changes.name {
            set.insert("name", name);
        }
        if let Some(price) = changes.price {
            set.insert("price", price);
        }

        doc! { "$set": set }
    }

    fn id_filter(id: Uuid) -> Document {
        doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn insert(&self, product: &Product) -> ProductResult<()> {
        self.collection
            .insert_one(product)
            .await
            .map_err(|e| ProductError::Insert(e.to_string()))?;

        tracing::info!(product_id = %product.id, "Product created successfully");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let product = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn find(&self, filter: &ProductFilter) -> ProductResult<Vec<Product>> {
        use futures_util::TryStreamExt;

        let mongo_filter = Self::build_filter(filter);

        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .build();

        let cursor = self
            .collection
            .find(mongo_filter)
            .with_options(options)
            .await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        Ok(products)
    }

    #[instrument(skip(self, changes))]
    async fn update(
        &self,
        id: Uuid,
        changes: &UpdateProduct,
        updated_at: DateTime<Utc>,
    ) -> ProductResult<u64> {
        let update = Self::build_update(changes, updated_at);

        let result = self
            .collection
            .update_one(Self::id_filter(id), update)
            .await?;

        tracing::info!(
            product_id = %id,
            matched = result.matched_count,
            modified = result.modified_count,
            "Product update applied"
        );
        Ok(result.matched_count)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ProductResult<u64> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;

        tracing::info!(product_id = %id, deleted = result.deleted_count, "Product delete applied");
        Ok(result.deleted_count)
    }
}
