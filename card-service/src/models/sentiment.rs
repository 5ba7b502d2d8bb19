//! Sentiment categories and their card image buckets.

/// The closed set of sentiments a card can express.
///
/// Labels arrive as the Korean strings the card client sends. Anything
/// outside this set resolves to the sentinel bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    /// "반가움"
    Welcome,
    /// "미안함"
    Apology,
    /// "축하함"
    Congratulation,
    /// "고마움"
    Gratitude,
    /// "기쁨"
    Joy,
}

impl Sentiment {
    pub const ALL: [Sentiment; 5] = [
        Sentiment::Welcome,
        Sentiment::Apology,
        Sentiment::Congratulation,
        Sentiment::Gratitude,
        Sentiment::Joy,
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "반가움" => Some(Sentiment::Welcome),
            "미안함" => Some(Sentiment::Apology),
            "축하함" => Some(Sentiment::Congratulation),
            "고마움" => Some(Sentiment::Gratitude),
            "기쁨" => Some(Sentiment::Joy),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Welcome => "반가움",
            Sentiment::Apology => "미안함",
            Sentiment::Congratulation => "축하함",
            Sentiment::Gratitude => "고마움",
            Sentiment::Joy => "기쁨",
        }
    }

    /// The image bucket for this sentiment. Never the sentinel.
    pub fn bucket(self) -> ImageBucket {
        match self {
            Sentiment::Welcome => ImageBucket(1),
            Sentiment::Apology => ImageBucket(2),
            Sentiment::Congratulation => ImageBucket(3),
            Sentiment::Gratitude => ImageBucket(4),
            Sentiment::Joy => ImageBucket(5),
        }
    }
}

/// A contiguous range of `typeId` values holding one sentiment's card
/// images.
///
/// `typeId` is stored as a string in the `cardImg` collection; bucket `n`
/// owns every record with `n <= typeId < n + 1` under the store's string
/// ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageBucket(u8);

impl ImageBucket {
    /// Sentinel: sentiment not recognized, no image category.
    pub const UNMAPPED: ImageBucket = ImageBucket(0);

    /// Map a sentiment label to its bucket.
    ///
    /// Total over all strings: unknown labels map to the sentinel instead
    /// of failing.
    pub fn resolve(label: &str) -> ImageBucket {
        Sentiment::from_label(label)
            .map(Sentiment::bucket)
            .unwrap_or(ImageBucket::UNMAPPED)
    }

    pub fn is_unmapped(self) -> bool {
        self.0 == 0
    }

    /// Inclusive lower key of the bucket's `typeId` range.
    pub fn start_key(self) -> String {
        self.0.to_string()
    }

    /// Exclusive upper key of the bucket's `typeId` range.
    pub fn end_key(self) -> String {
        (self.0 + 1).to_string()
    }
}
