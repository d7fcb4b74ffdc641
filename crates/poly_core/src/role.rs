//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Speaker roles for plain text messages.
///
/// The function-call and function-result message variants carry their
/// wire roles implicitly; see [`crate::ChatMessage`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}
