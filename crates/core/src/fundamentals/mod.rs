//! Fundamentals module - canonical records, normalization, services, and traits.

mod fundamentals_model;
mod fundamentals_service;
mod fundamentals_traits;
mod normalizer;

#[cfg(test)]
mod service_tests;

pub use fundamentals_model::{FundamentalRecord, IngestionResult, InsertOutcome};
pub use fundamentals_service::FundamentalService;
pub use fundamentals_traits::{FundamentalRepositoryTrait, FundamentalServiceTrait};
pub use normalizer::normalize;
