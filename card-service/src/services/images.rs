//! Sentiment-bucketed card image selection.

use crate::models::{CardImageRecord, ImageBucket};
use crate::services::{metrics, CardDb};
use rand::seq::SliceRandom;
use service_core::error::AppError;

/// Picks one card image at random from the bucket a sentiment maps to.
#[derive(Clone)]
pub struct ImagePicker {
    db: CardDb,
}

impl ImagePicker {
    pub fn new(db: CardDb) -> Self {
        Self { db }
    }

    /// Resolve the sentiment's bucket and choose one image URL uniformly
    /// from its records.
    ///
    /// Unmapped sentiments return `None` without touching the store; an
    /// empty bucket also returns `None` rather than failing.
    pub async fn fetch_image_url(&self, sentiment: &str) -> Result<Option<String>, AppError> {
        let bucket = ImageBucket::resolve(sentiment);
        if bucket.is_unmapped() {
            tracing::info!(sentiment = %sentiment, "Sentiment has no image bucket");
            metrics::record_image_lookup("unmapped");
            return Ok(None);
        }

        let records = self.db.find_bucket_images(bucket).await?;
        let url = choose_image(&mut rand::thread_rng(), &records).cloned();

        match &url {
            Some(_) => metrics::record_image_lookup("hit"),
            None => {
                tracing::warn!(
                    sentiment = %sentiment,
                    bucket = %bucket.start_key(),
                    "No card images stocked for bucket"
                );
                metrics::record_image_lookup("empty_bucket");
            }
        }

        Ok(url)
    }
}

/// Uniform choice of an image URL from the candidate records.
fn choose_image<'a, R: rand::Rng + ?Sized>(
    rng: &mut R,
    records: &'a [CardImageRecord],
) -> Option<&'a String> {
    records.choose(rng).map(|r| &r.img_url)
}
