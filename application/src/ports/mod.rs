//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod catalog_gateway;
pub mod confirmation;
pub mod fault;
pub mod notifier;
pub mod response_gateway;
