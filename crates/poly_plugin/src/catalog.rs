//! OpenAPI catalog types and the catalog fetch client.

use indexmap::IndexMap;
use poly_error::{CatalogError, CatalogErrorKind, CatalogResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

/// An OpenAPI document describing a plugin's callable functions.
///
/// Path and schema maps keep document insertion order; translation
/// output order follows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct OpenApiDocument {
    /// OpenAPI version string, e.g. "3.0.1"
    #[serde(default)]
    openapi: String,
    /// Path mapping, in document order
    paths: IndexMap<String, PathItem>,
    /// Reusable components, including request body schemas
    #[serde(default)]
    components: Components,
}

/// Operations available on a single path.
///
/// Only `post` matters to the plugin protocol; other methods are
/// ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct PathItem {
    /// The post operation, when the path has one
    #[serde(default)]
    post: Option<Operation>,
}

/// A single OpenAPI operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Unique operation identifier; becomes the function name
    operation_id: String,
    /// Summary line; becomes the function description
    #[serde(default)]
    summary: String,
    /// Request body descriptor
    #[serde(default)]
    request_body: Option<RequestBody>,
}

/// Request body descriptor for an operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct RequestBody {
    /// Whether the body is required
    #[serde(default)]
    required: bool,
    /// Media types, keyed by content type
    #[serde(default)]
    content: IndexMap<String, MediaType>,
}

/// Schema holder for a media type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct MediaType {
    /// Schema reference
    #[serde(default)]
    schema: Option<SchemaObject>,
}

/// A schema reference of the form `#/components/schemas/<name>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct SchemaObject {
    /// The `$ref` string, when present
    #[serde(rename = "$ref", default)]
    reference: Option<String>,
}

/// Reusable component schemas.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, derive_getters::Getters)]
pub struct Components {
    /// Schema definitions, keyed by name
    #[serde(default)]
    schemas: IndexMap<String, serde_json::Value>,
}

/// Client that fetches a plugin's OpenAPI catalog.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    /// Creates a new catalog client rooted at `base_url`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetches the OpenAPI document for the given plugin.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is unreachable, answers with a
    /// non-success status, or sends a body that is not an OpenAPI
    /// document.
    #[instrument(skip(self), fields(plugin_id = %plugin_id))]
    pub async fn fetch(&self, plugin_id: &str) -> CatalogResult<OpenApiDocument> {
        let url = format!("{}/plugins/{}/openapi", self.base_url, plugin_id);
        debug!(url = %url, "Fetching plugin catalog");

        let response = self.client.get(&url).send().await.map_err(|e| {
            error!(error = ?e, "Catalog request failed");
            CatalogError::new(CatalogErrorKind::Transport(e.to_string()))
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, "Catalog returned an error");
            return Err(CatalogError::new(CatalogErrorKind::Status {
                status: status.as_u16(),
                message,
            }));
        }

        let document: OpenApiDocument = response.json().await.map_err(|e| {
            error!(error = ?e, "Catalog body did not decode");
            CatalogError::new(CatalogErrorKind::Decode(e.to_string()))
        })?;

        debug!(path_count = document.paths().len(), "Fetched catalog");
        Ok(document)
    }
}
