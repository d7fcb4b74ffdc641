//! Shared fixtures for plugin tests.
#![allow(dead_code)]

use poly_plugin::OpenApiDocument;
use serde_json::{json, Value};

pub const SMS_PATH: &str = "/functions/api/ec66c324-80fe-4d9a-a5fa-2f7f38384155/execute";
pub const PRODUCT_PATH: &str = "/functions/api/0b7ef6a1-4c83-4f61-93c5-66d2f7a5e9ab/execute";

/// A two-function plugin catalog in OpenAPI 3.0.1 form.
pub fn catalog_json() -> Value {
    json!({
        "openapi": "3.0.1",
        "info": {
            "version": "v1",
            "title": "Service Nexus",
            "description": "Endpoints that allow users to execute functions",
        },
        "servers": [{"url": "https://service-nexus.example.com"}],
        "paths": {
            SMS_PATH: {
                "post": {
                    "summary": "Sends an SMS message through Twilio",
                    "operationId": "commsMessagingTwilioSendSms",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": {
                                    "$ref": "#/components/schemas/commsMessagingTwilioSendSmsBody",
                                },
                            },
                        },
                    },
                    "responses": {
                        "201": {
                            "description": "Detailed status of the sent message",
                        },
                    },
                },
            },
            PRODUCT_PATH: {
                "post": {
                    "summary": "Looks up a product in Shopify",
                    "operationId": "productsShopifyLookupProduct",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": {
                                    "$ref": "#/components/schemas/productsShopifyLookupProductBody",
                                },
                            },
                        },
                    },
                },
            },
        },
        "components": {
            "schemas": {
                "commsMessagingTwilioSendSmsBody": {
                    "type": "object",
                    "properties": {
                        "My_Phone_Number": {"type": "string"},
                        "message": {"type": "string"},
                    },
                    "required": ["My_Phone_Number", "message"],
                },
                "commsMessagingTwilioSendSmsResponse": {
                    "type": "object",
                    "description": "response",
                    "properties": {
                        "body": {"type": "string"},
                        "from": {"type": "string"},
                    },
                },
                "productsShopifyLookupProductBody": {
                    "type": "object",
                    "properties": {
                        "productId": {"type": "number"},
                    },
                    "required": ["productId"],
                },
            },
        },
    })
}

/// The catalog parsed into the typed document.
pub fn mock_document() -> OpenApiDocument {
    serde_json::from_value(catalog_json()).expect("catalog fixture parses")
}
