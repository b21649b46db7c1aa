// src/lib.rs

pub mod core;
pub mod enrichment;
pub mod errors;
pub mod persistence;

pub use crate::core::engine::KeywordEngine;
pub use crate::core::types::{EnrichmentRecord, Keyword, NormalizeMode};
pub use crate::errors::Error;
