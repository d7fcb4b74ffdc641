//! Callable function descriptors presented to the model.

use serde::{Deserialize, Serialize};

/// A name/description/parameter-schema triple describing one callable
/// capability, in the provider's function-calling format.
///
/// Specs are produced once per OpenAPI operation by the translator and
/// never mutated afterwards.
///
/// # Examples
///
/// ```
/// use poly_core::FunctionSpec;
/// use serde_json::json;
///
/// let spec = FunctionSpec::new(
///     "commsMessagingTwilioSendSms",
///     "Send an SMS through Twilio",
///     json!({"type": "object", "properties": {}}),
/// );
/// assert_eq!(spec.name(), "commsMessagingTwilioSendSms");
/// ```
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters, derive_new::new,
)]
pub struct FunctionSpec {
    /// Function name sent to the model (the OpenAPI `operationId`)
    #[new(into)]
    name: String,
    /// Human-readable summary of what the function does
    #[new(into)]
    description: String,
    /// JSON-schema object describing the accepted arguments
    parameters: serde_json::Value,
}
