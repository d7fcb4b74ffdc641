//! Tests for function execution against a mocked plugin endpoint.

mod test_utils;

use httpmock::prelude::*;
use poly_core::Credentials;
use poly_error::{ExecutionErrorKind, PluginError};
use poly_plugin::FunctionExecutor;
use serde_json::json;
use test_utils::{mock_document, SMS_PATH};

const SMS_ARGUMENTS: &str = "{\n\"My_Phone_Number\": \"503-267-0612\",\n\"message\": \"tested\"\n}";

fn credentials() -> Credentials {
    Credentials::new("poly-api-key")
}

#[tokio::test]
async fn test_executes_resolved_path_with_parsed_body() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(SMS_PATH)
                .header("authorization", "Bearer poly-api-key")
                .json_body(json!({
                    "My_Phone_Number": "503-267-0612",
                    "message": "tested",
                }));
            then.status(201).json_body(json!({"status": "queued"}));
        })
        .await;

    let executor = FunctionExecutor::new(server.url(""));
    let result = executor
        .execute(
            &credentials(),
            &mock_document(),
            "commsMessagingTwilioSendSms",
            SMS_ARGUMENTS,
        )
        .await?;

    assert_eq!(result.content(), Some(r#"{"status":"queued"}"#));
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_never_targets_another_path() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let sms = server
        .mock_async(|when, then| {
            when.method(POST).path(SMS_PATH);
            then.status(201).body("{}");
        })
        .await;
    let product = server
        .mock_async(|when, then| {
            when.method(POST).path(test_utils::PRODUCT_PATH);
            then.status(201).body("{}");
        })
        .await;

    let executor = FunctionExecutor::new(server.url(""));
    executor
        .execute(
            &credentials(),
            &mock_document(),
            "commsMessagingTwilioSendSms",
            SMS_ARGUMENTS,
        )
        .await?;

    sms.assert_hits_async(1).await;
    product.assert_hits_async(0).await;
    Ok(())
}

#[tokio::test]
async fn test_unknown_function() {
    let server = MockServer::start_async().await;
    let executor = FunctionExecutor::new(server.url(""));

    let err = executor
        .execute(
            &credentials(),
            &mock_document(),
            "hallucinatedFunction",
            "{}",
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PluginError::Execution(ref e)
            if matches!(e.kind, ExecutionErrorKind::UnknownFunction(_))
    ));
}

#[tokio::test]
async fn test_arguments_must_be_json() {
    let server = MockServer::start_async().await;
    let executor = FunctionExecutor::new(server.url(""));

    let err = executor
        .execute(
            &credentials(),
            &mock_document(),
            "commsMessagingTwilioSendSms",
            "send the message please",
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PluginError::Execution(ref e)
            if matches!(e.kind, ExecutionErrorKind::ArgumentParse(_))
    ));
}

#[tokio::test]
async fn test_error_status_body_passes_through() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(SMS_PATH);
            then.status(500).body("upstream exploded");
        })
        .await;

    let executor = FunctionExecutor::new(server.url(""));
    let result = executor
        .execute(
            &credentials(),
            &mock_document(),
            "commsMessagingTwilioSendSms",
            SMS_ARGUMENTS,
        )
        .await?;

    // Status validation is the caller's concern; the body comes back as-is.
    assert_eq!(result.content(), Some("upstream exploded"));
    Ok(())
}
