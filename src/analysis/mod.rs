//! Feature extraction: markup + target keywords → a fixed [`SignalSet`].

pub mod extractor;
mod markup;
pub mod signals;


pub use extractor::ContentAnalyzer;
pub use signals::{SignalSet, SignalValue};
