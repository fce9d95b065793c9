//! Shared response envelope types for API handlers.
//!
//! Read endpoints use a `{ "data": ... }` envelope. Admin mutations answer
//! with [`crate::actions::ActionOutcome`] instead.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
