pub mod error;
pub mod locale;
pub mod numbers;
pub mod numerals;
pub mod rewrite;
pub mod text;

// Re-export key functionality for easy access
pub use error::{NormalizeError, Result};
pub use locale::Locale;
pub use numbers::{normalize_numbers, NumberNormalizer, NumberWordConverter};
pub use text::cleaners::{clean_text, Cleaner, CleanerChain};
