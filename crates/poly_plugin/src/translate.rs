//! Translation from OpenAPI operations to callable function specs.

use crate::catalog::{OpenApiDocument, Operation};
use indexmap::IndexMap;
use poly_core::FunctionSpec;
use poly_error::{SchemaError, SchemaErrorKind, SchemaResult};
use tracing::{debug, instrument};

const JSON_CONTENT: &str = "application/json";

/// Translates every operation in the document into a function spec.
///
/// Produces exactly one spec per path, in document order: name from
/// `operationId`, description from `summary`, parameters from the
/// resolved request body schema.
///
/// # Errors
///
/// Fails when a path has no `post` operation, when the request body
/// `$ref` is absent or malformed, or when the reference does not
/// resolve under `components.schemas`.
#[instrument(skip(document), fields(path_count = document.paths().len()))]
pub fn translate(document: &OpenApiDocument) -> SchemaResult<Vec<FunctionSpec>> {
    let mut specs = Vec::with_capacity(document.paths().len());

    for (path, item) in document.paths() {
        let post = require_post(path, item)?;
        let schema_name = body_schema_name(path, post)?;
        let parameters = document
            .components()
            .schemas()
            .get(&schema_name)
            .ok_or_else(|| SchemaError::new(SchemaErrorKind::UnknownSchema(schema_name.clone())))?;

        specs.push(FunctionSpec::new(
            post.operation_id().clone(),
            post.summary().clone(),
            parameters.clone(),
        ));
    }

    debug!(spec_count = specs.len(), "Translated catalog");
    Ok(specs)
}

/// Builds the operation-name to path mapping for execution.
///
/// Rebuilt per invocation; iteration follows document order like
/// [`translate`].
pub fn name_path_map(document: &OpenApiDocument) -> SchemaResult<IndexMap<String, String>> {
    let mut map = IndexMap::with_capacity(document.paths().len());

    for (path, item) in document.paths() {
        let post = require_post(path, item)?;
        map.insert(post.operation_id().clone(), path.clone());
    }

    Ok(map)
}

fn require_post<'a>(
    path: &str,
    item: &'a crate::catalog::PathItem,
) -> SchemaResult<&'a Operation> {
    item.post()
        .as_ref()
        .ok_or_else(|| SchemaError::new(SchemaErrorKind::MissingPostOperation(path.to_string())))
}

/// Resolves the schema name from the operation's request body `$ref`.
///
/// The name is the segment after the last `/`, per the
/// `#/components/schemas/<name>` convention.
fn body_schema_name(path: &str, post: &Operation) -> SchemaResult<String> {
    let reference = post
        .request_body()
        .as_ref()
        .and_then(|body| body.content().get(JSON_CONTENT))
        .and_then(|media| media.schema().as_ref())
        .and_then(|schema| schema.reference().clone());

    let Some(reference) = reference else {
        return Err(SchemaError::new(SchemaErrorKind::MalformedRef {
            path: path.to_string(),
            reference: None,
        }));
    };

    match reference.rsplit_once('/') {
        Some((_, name)) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(SchemaError::new(SchemaErrorKind::MalformedRef {
            path: path.to_string(),
            reference: Some(reference),
        })),
    }
}
