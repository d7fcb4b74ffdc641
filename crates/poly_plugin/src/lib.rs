//! Plugin catalog, function translation, and the two-step call protocol.
//!
//! A plugin exposes its callable functions as an OpenAPI document. This
//! crate fetches that document, translates each operation into a
//! [`poly_core::FunctionSpec`] for the model's function-calling schema,
//! executes the function the model chooses, and drives the
//! ask / call / respond round trip.

mod catalog;
mod executor;
mod orchestrator;
mod translate;

pub use catalog::{
    CatalogClient, Components, MediaType, OpenApiDocument, Operation, PathItem, RequestBody,
    SchemaObject,
};
pub use executor::FunctionExecutor;
pub use orchestrator::{PLUGIN_TEMPERATURE, PluginChat};
pub use translate::{name_path_map, translate};
