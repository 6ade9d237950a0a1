//! Fundamentals provider abstractions and implementations.
//!
//! This module contains:
//! - The `FundamentalsProvider` trait that all providers implement
//! - The Yahoo Finance implementation
//!
//! Providers receive pre-resolved symbols. The conversion from a user ticker
//! and market to the provider symbol happens in the resolver module, not in
//! the providers themselves.

mod traits;

pub mod yahoo;

pub use traits::FundamentalsProvider;
