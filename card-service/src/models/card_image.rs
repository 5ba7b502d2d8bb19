//! Card image records from the `cardImg` collection.

use serde::{Deserialize, Serialize};

/// One card image, bucketed by sentiment category.
///
/// Records are created and maintained outside this service; this is a
/// read-only view. `typeId` carries the bucket key as a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardImageRecord {
    #[serde(rename = "typeId")]
    pub type_id: String,

    #[serde(rename = "imgUrl")]
    pub img_url: String,
}
