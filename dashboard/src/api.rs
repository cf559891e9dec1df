//! ==============================================================================
//! api.rs - API client for the advisor backend
//! ==============================================================================

use advisor_shared::{
    ApiError, HealthResponse, InteractionRequest, InteractionResponse, QueryRequest,
    QueryResponse,
};
use gloo_net::http::{Request, Response};
use leptos::logging::{log, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Base URL of the advisor api, overridable at build time
pub const API_BASE_URL: &str = match option_env!("ADVISOR_API_BASE") {
    Some(url) => url,
    None => "http://localhost:8000",
};

fn endpoint(path: &str) -> String {
    format!("{}{}", API_BASE_URL.trim_end_matches('/'), path)
}

// ==============================================================================
// API functions
// ==============================================================================

/// Ask a general medication question
pub async fn submit_query(body: &QueryRequest) -> Result<QueryResponse, ApiError> {
    post_json("/query", body).await
}

/// Check two drugs for an interaction
pub async fn check_interaction(body: &InteractionRequest) -> Result<InteractionResponse, ApiError> {
    post_json("/check-interaction", body).await
}

/// Backend health probe
pub async fn check_health() -> Result<HealthResponse, ApiError> {
    let response = Request::get(&endpoint("/health"))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode(response).await
}

// ==============================================================================
// helpers
// ==============================================================================

async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let url = endpoint(path);
    log!("POST {}", url);

    let result = send_json(&url, body).await;

    if let Err(e) = &result {
        warn!("POST {} failed: {}", url, e);
    }
    result
}

async fn send_json<B, T>(url: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode(response).await
}

/// Map non-2xx to a status error carrying the service detail, otherwise parse the body
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status(status, &body));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base() {
        let url = endpoint("/check-interaction");
        assert!(url.starts_with(API_BASE_URL.trim_end_matches('/')));
        assert!(url.ends_with("/check-interaction"));
        assert!(!url.contains("//check-interaction"));
    }
}
