//! Wire-level helpers for the catalog REST API

mod envelope;

pub use envelope::{message_from_body, ApiEnvelope};
