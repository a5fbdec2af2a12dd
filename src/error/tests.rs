//! Unit tests for error module.

use super::*;

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// ============================================================================
// ApiError Display Tests
// ============================================================================

#[test]
fn test_api_error_query_display() {
    let error = ApiError::Query(sqlx::Error::PoolTimedOut);
    assert!(format!("{}", error).starts_with("Query error: "));
}

#[test]
fn test_api_error_decode_display() {
    let error = ApiError::Decode(sqlx::Error::ColumnNotFound("email".to_string()));
    let display = format!("{}", error);
    assert!(display.starts_with("Decode error: "));
    assert!(display.contains("email"));
}

#[test]
fn test_api_error_unexpected_probe_result_display() {
    let error = ApiError::UnexpectedProbeResult(2);
    assert_eq!(format!("{}", error), "Unexpected health check result: 2");
}

// ============================================================================
// sqlx::Error Classification Tests
// ============================================================================

#[test]
fn test_column_not_found_is_decode() {
    let error = ApiError::from(sqlx::Error::ColumnNotFound("name".to_string()));
    assert!(matches!(error, ApiError::Decode(_)));
}

#[test]
fn test_column_decode_is_decode() {
    let error = ApiError::from(sqlx::Error::ColumnDecode {
        index: "\"id\"".to_string(),
        source: "mismatched types".into(),
    });
    assert!(matches!(error, ApiError::Decode(_)));
}

#[test]
fn test_pool_timeout_is_query() {
    let error = ApiError::from(sqlx::Error::PoolTimedOut);
    assert!(matches!(error, ApiError::Query(_)));
}

#[test]
fn test_row_not_found_is_query() {
    let error = ApiError::from(sqlx::Error::RowNotFound);
    assert!(matches!(error, ApiError::Query(_)));
}

// ============================================================================
// ApiError IntoResponse Tests
// ============================================================================

#[tokio::test]
async fn test_query_error_into_response() {
    let response = ApiError::Query(sqlx::Error::PoolTimedOut).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, INTERNAL_ERROR_BODY);
}

#[tokio::test]
async fn test_decode_error_hides_details() {
    let response =
        ApiError::Decode(sqlx::Error::ColumnNotFound("secret_column".to_string())).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_text(response).await;
    assert_eq!(body, INTERNAL_ERROR_BODY);
    assert!(!body.contains("secret_column"));
}

#[tokio::test]
async fn test_template_error_into_response() {
    let response = ApiError::Template(tera::Error::msg("missing template")).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, INTERNAL_ERROR_BODY);
}

#[tokio::test]
async fn test_health_failures_share_body() {
    let failed = ApiError::HealthCheck(sqlx::Error::PoolClosed).into_response();
    let wrong_value = ApiError::UnexpectedProbeResult(0).into_response();

    assert_eq!(failed.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(wrong_value.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(failed).await, HEALTH_CHECK_FAILED_BODY);
    assert_eq!(body_text(wrong_value).await, HEALTH_CHECK_FAILED_BODY);
}

#[test]
fn test_error_response_is_plain_text() {
    let response = ApiError::UnexpectedProbeResult(7).into_response();
    let content_type = response
        .headers()
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/plain"));
}

// ============================================================================
// ApiError Debug Tests
// ============================================================================

#[test]
fn test_api_error_debug() {
    let error = ApiError::UnexpectedProbeResult(42);
    let debug = format!("{:?}", error);
    assert!(debug.contains("UnexpectedProbeResult"));
    assert!(debug.contains("42"));
}
