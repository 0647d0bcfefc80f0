//! Collection store access

pub mod repository;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::Record;

pub use repository::PgCollectionStore;

/// A queryable store of named record collections
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Fetch every record of `collection`, in the order the store yields them
    async fn query_all(&self, collection: &str) -> Result<Vec<Record>, StoreError>;

    /// Insert one record into `collection` and return it as stored
    async fn insert(&self, collection: &str, record: Record) -> Result<Record, StoreError>;
}
