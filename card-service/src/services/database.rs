//! Database operations for the card service.
//!
//! Read-side access to the `cardImg` collection via MongoDB.

use crate::models::{CardImageRecord, ImageBucket};
use crate::services::metrics;
use futures::TryStreamExt;
use mongodb::{
    bson::doc, options::IndexOptions, Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct CardDb {
    client: MongoClient,
    db: Database,
}

impl CardDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for card-service");

        // Range queries on typeId back every image lookup
        let type_id_index = IndexModel::builder()
            .keys(doc! { "typeId": 1 })
            .options(
                IndexOptions::builder()
                    .name("type_id_idx".to_string())
                    .build(),
            )
            .build();

        self.card_images()
            .create_index(type_id_index, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create typeId index: {}", e);
                metrics::record_db_error("create_index", "cardImg");
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        tracing::info!("Successfully created all MongoDB indexes");
        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;
        Ok(())
    }

    // Collection accessors

    pub fn card_images(&self) -> Collection<CardImageRecord> {
        self.db.collection("cardImg")
    }

    /// Fetch every record in the bucket's `typeId` range.
    ///
    /// Bucket `n` selects `n <= typeId < n + 1`; `typeId` is compared as a
    /// string by the store, so both bounds stay string-encoded.
    pub async fn find_bucket_images(
        &self,
        bucket: ImageBucket,
    ) -> Result<Vec<CardImageRecord>, AppError> {
        let filter = doc! {
            "typeId": { "$gte": bucket.start_key(), "$lt": bucket.end_key() }
        };

        let cursor = self.card_images().find(filter, None).await.map_err(|e| {
            tracing::error!("Failed to query card images: {}", e);
            metrics::record_db_error("find", "cardImg");
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;

        let records: Vec<CardImageRecord> = cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to collect card image records: {}", e);
            metrics::record_db_error("collect", "cardImg");
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;

        Ok(records)
    }
}
