#![deny(unsafe_code)]

pub mod error;
pub mod response;
pub mod structured;
pub mod text;

pub use error::{EXCERPT_CHARS, ExtractError, ExtractionStage, excerpt_of};
pub use response::decode_extraction_response;
pub use structured::{ReadingExtractor, StaticExtractor, UnavailableExtractor};
pub use text::{PlainTextExtractor, TextExtractor};
