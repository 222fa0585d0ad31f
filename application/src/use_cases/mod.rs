//! Use cases - orchestration of the engine against the ports.

pub mod author_catalog;
pub mod fill_assessment;
