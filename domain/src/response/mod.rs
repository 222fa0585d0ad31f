//! Response handling: codec, immutable store, submission validation.

pub mod codec;
pub mod store;
pub mod validator;
