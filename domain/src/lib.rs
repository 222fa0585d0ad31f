//! Domain layer for quillform
//!
//! This crate contains the questionnaire engine: the type taxonomy, the
//! response codec and store, submission validation, the question editing
//! session, and the reorder algorithm. It has no dependencies on
//! infrastructure or presentation concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Questions and options
//!
//! A [`QuestionDefinition`] belongs to a template and carries a
//! [`QuestionType`]. Selection-style types own an ordered list of
//! [`OptionDefinition`] values with at most one default.
//!
//! ## Responses
//!
//! Every answer travels as a single raw string. Multi-valued answers are
//! the selected option values joined with `;`, see [`response::codec`].
//! The [`ResponseStore`] is an immutable map from question id to raw
//! string; updates return a new store.

pub mod core;
pub mod form;
pub mod question;
pub mod response;

// Re-export commonly used types
pub use crate::core::{
    error::DomainError,
    ids::{InstanceId, OptionId, QuestionId, RecordId, TemplateId},
};
pub use form::{FormOption, FormQuestion, render_form};
pub use question::{
    builder::{QuestionDraft, QuestionEditSession},
    entities::{AssessmentInstance, OptionDefinition, OptionIdentity, QuestionDefinition},
    reorder::{renumber, reorder},
    taxonomy::{InputKind, QuestionType},
};
pub use response::{
    codec::{ResponseValue, VALUE_SEPARATOR, decode, encode},
    store::ResponseStore,
    validator::all_required_answered,
};
