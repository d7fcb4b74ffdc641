//! Catalog specification types surfaced in completion prompts.

use poly_core::FunctionSpec;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

/// Kinds of catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpecType {
    ApiFunction,
    CustomFunction,
    ServerFunction,
    WebhookHandle,
}

/// Argument type descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct PropertyType {
    /// Type kind: "primitive", "object", ...
    kind: String,
    /// Concrete type name for primitives, e.g. "string" or "number"
    #[serde(rename = "type", default)]
    name: Option<String>,
}

impl PropertyType {
    /// Renders the type for prompts and JSON schemas.
    ///
    /// Primitives render as their declared name; everything else
    /// renders as "object".
    pub fn render(&self) -> &str {
        if self.kind == "primitive" {
            self.name.as_deref().unwrap_or("string")
        } else {
            "object"
        }
    }
}

/// One argument of a catalog function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct PropertySpec {
    /// Argument name
    name: String,
    /// Argument description
    #[serde(default)]
    description: String,
    /// Whether the argument is required
    #[serde(default)]
    required: bool,
    /// Argument type
    #[serde(rename = "type")]
    property_type: PropertyType,
}

/// The callable signature of a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct FunctionSignature {
    /// Declared arguments, in signature order
    #[serde(default)]
    arguments: Vec<PropertySpec>,
}

/// A catalog entry as served by the specification service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Specification {
    /// Stable identifier
    id: Uuid,
    /// Entry kind
    #[serde(rename = "type")]
    spec_type: SpecType,
    /// Dotted context, e.g. "comms.messaging"
    #[serde(default)]
    context: String,
    /// Entry name within the context
    name: String,
    /// Human-readable description
    #[serde(default)]
    description: String,
    /// Callable signature, absent on webhook handles
    #[serde(default)]
    function: Option<FunctionSignature>,
}

impl Specification {
    /// Renders the dotted library path, e.g.
    /// `poly.comms.messaging.twilioSendSms`.
    pub fn path(&self) -> String {
        if self.context.is_empty() {
            format!("poly.{}", self.name)
        } else {
            format!("poly.{}.{}", self.context, self.name)
        }
    }

    /// Renders the path with its argument list, e.g.
    /// `poly.comms.messaging.twilioSendSms(My_Phone_Number: string, message: string)`.
    pub fn path_with_args(&self) -> String {
        let arguments = self
            .function
            .as_ref()
            .map(|f| {
                f.arguments()
                    .iter()
                    .map(|a| format!("{}: {}", a.name(), a.property_type().render()))
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default();
        format!("{}({})", self.path(), arguments)
    }

    /// Converts this specification into a function-calling spec.
    ///
    /// The parameter schema is a JSON-schema object with one property
    /// per argument and a `required` array listing the mandatory ones.
    pub fn to_function_spec(&self) -> FunctionSpec {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        if let Some(function) = &self.function {
            for argument in function.arguments() {
                properties.insert(
                    argument.name().clone(),
                    json!({
                        "type": argument.property_type().render(),
                        "description": argument.description(),
                    }),
                );
                if *argument.required() {
                    required.push(argument.name().clone());
                }
            }
        }

        let parameters = json!({
            "type": "object",
            "properties": properties,
            "required": required,
        });

        FunctionSpec::new(
            format!("{}{}", self.context, self.name),
            self.description.clone(),
            parameters,
        )
    }
}
