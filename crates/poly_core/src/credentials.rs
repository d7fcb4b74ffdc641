//! Execution credentials threaded through the plugin round trip.

use serde::{Deserialize, Serialize};

/// Bearer credentials for calling catalog functions.
///
/// Supplied explicitly by the caller at invocation time; no component
/// reads credentials from ambient process state.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters, derive_new::new,
)]
pub struct Credentials {
    /// API key sent as `Authorization: Bearer <key>`
    #[new(into)]
    api_key: String,
}
