//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The store depends on these traits, not concrete implementations.

mod data_service;

pub use data_service::CurrencyDataService;
