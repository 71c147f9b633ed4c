//! Product grading for the transparency site: a deterministic rules engine, the codec that
//! maps grades onto stored report categories, and the report service built on both.

pub mod codec;
pub mod config;
pub mod error;
pub mod extractor;
pub mod grading;
pub mod reports;
pub mod telemetry;

pub use grading::{AssessmentResult, Dimension, Grade, GradingEngine, ProductAttributes};
