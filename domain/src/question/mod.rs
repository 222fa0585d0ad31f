//! Question aggregate: taxonomy, entities, editing session, reordering.

pub mod builder;
pub mod entities;
pub mod reorder;
pub mod taxonomy;
