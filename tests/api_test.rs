use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;
use setlistify::api::ApiError;
use setlistify::error::Error;

async fn into_status_and_body(error: ApiError) -> (StatusCode, Value) {
    let response = error.into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_not_found_maps_to_404_with_error_body() {
    let error = ApiError::Pipeline(Error::NotFound("Artist 'Nobody' not found.".to_string()));
    let (status, body) = into_status_and_body(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Artist 'Nobody' not found.");
}

#[tokio::test]
async fn test_auth_error_maps_to_401() {
    let error = ApiError::Pipeline(Error::Auth("Session expired".to_string()));
    let (status, body) = into_status_and_body(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].as_str().unwrap().contains("Session expired"));
}

#[tokio::test]
async fn test_upstream_error_maps_to_502() {
    // An expired or malformed token at playlist creation ends here: a
    // structured body, never an unhandled failure
    let error = ApiError::Pipeline(Error::Upstream("The access token expired".to_string()));
    let (status, body) = into_status_and_body(error).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("access token"));
}

#[tokio::test]
async fn test_bad_request_maps_to_400() {
    let error = ApiError::BadRequest("Missing artistName or songs in request body".to_string());
    let (status, body) = into_status_and_body(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing artistName or songs in request body");
}
