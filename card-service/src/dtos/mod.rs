pub mod cards;

pub use cards::{
    CardUrlRequest, CardUrlResponse, LetterRequest, LetterResponse, PhraseRequest, PhraseResponse,
};
