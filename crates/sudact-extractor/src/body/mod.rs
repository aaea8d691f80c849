//! Body classifier
//!
//! Finds the main part of a ruling, splits it into sentences, labels every
//! sentence with the external classifier and consolidates the labels into
//! spans.

mod classifier;
mod consolidate;
mod delimit;

pub use classifier::BodyClassifier;
pub use consolidate::consolidate;
pub use delimit::main_part;
