//! Lightweight ML utilities (deploy-safe inference).
//!
//! The classifier is a small dense network deserialized from a JSON
//! artifact at startup. No training code lives here; artifacts are
//! produced offline and only queried at runtime.

pub mod classifier;

pub use classifier::{Activation, Classifier, DenseLayer};
