use async_trait::async_trait;
use mongodb::bson::Document;

use crate::error::AppError;

/// Name of the collection holding advertisement records.
pub const ADVERTISE_COLLECTION: &str = "advertise";

/// Repository trait for advertisement reads.
///
/// This trait allows mocking the database layer in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdRepository: Send + Sync {
    /// Fetch every advertisement document in the collection.
    ///
    /// Advertisements are opaque documents: no shape is fixed or validated
    /// by this service, the full field set is passed through as stored.
    async fn find_all(&self) -> Result<Vec<Document>, AppError>;
}

/// MongoDB implementation of the AdRepository.
pub struct MongoAdRepository {
    collection: mongodb::Collection<Document>,
}

impl MongoAdRepository {
    pub fn new(db: &mongodb::Database) -> Self {
        Self {
            collection: db.collection(ADVERTISE_COLLECTION),
        }
    }
}

#[async_trait]
impl AdRepository for MongoAdRepository {
    async fn find_all(&self) -> Result<Vec<Document>, AppError> {
        use mongodb::bson::doc;

        let mut cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        let mut ads = Vec::new();
        use futures::TryStreamExt;
        while let Some(ad) = cursor
            .try_next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            ads.push(ad);
        }

        Ok(ads)
    }
}
