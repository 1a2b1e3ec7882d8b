pub mod classifier;
pub mod detectors;
pub mod prediction;
pub mod statistics;
