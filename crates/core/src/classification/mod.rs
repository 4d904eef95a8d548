//! Aggregate classification of bulk write results

pub mod classifier;

pub use classifier::{classify, contains_failure_marker, ResultClassifier};
