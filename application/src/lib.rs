//! Application layer for quillform
//!
//! Use cases orchestrate the domain engine against external
//! collaborators. Collaborators are reached only through ports defined
//! here; adapters live in the infrastructure layer (or in the binary for
//! presentation concerns like interactive confirmation).
//!
//! Fault policy: a remote failure is always terminal at the use case that
//! issued the call. It is mapped to a human-readable message, surfaced
//! through the [`Notifier`] port, and the in-memory state (response
//! store, working copy) is left intact so the user can retry.

pub mod ports;
pub mod use_cases;

pub use ports::{
    catalog_gateway::CatalogGateway,
    confirmation::{AutoConfirm, AutoDecline, ConfirmationPort},
    fault::RemoteFault,
    notifier::{NoNotifier, Notifier, Severity},
    response_gateway::{InstanceForm, ResponseGateway, ResponseRecord},
};
pub use use_cases::{
    author_catalog::{CatalogEditor, EditOutcome},
    fill_assessment::{AssessmentSession, LoadGeneration, SubmitOutcome},
};
