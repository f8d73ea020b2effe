//! Classification rules

pub mod classifier;

pub use classifier::classify;
