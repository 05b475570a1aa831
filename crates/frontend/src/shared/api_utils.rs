//! API utilities for frontend-backend communication
//!
//! Builds API URLs and wraps `gloo-net` requests so every endpoint returns
//! `Result<T, ApiError>`.

use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Port of the dashboard API when the base is derived from the page location
pub const API_PORT: u16 = 8000;

/// Get the base URL for API requests
///
/// `SUPPLY_API_BASE` set at compile time wins. Otherwise the base is built from
/// the current window location with port `API_PORT`, e.g.
/// "http://localhost:8000". Empty string if window is not available.
pub fn api_base() -> String {
    if let Some(base) = option_env!("SUPPLY_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path
///
/// ```ignore
/// let url = api_url("/product/metrics");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// `path` with `query` appended as a query string; empty queries add nothing
pub fn url_with_query<Q: Serialize>(path: &str, query: &Q) -> String {
    let qs = serde_qs::to_string(query).unwrap_or_default();
    if qs.is_empty() {
        api_url(path)
    } else {
        format!("{}?{}", api_url(path), qs)
    }
}

fn network_error(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

/// Maps non-2xx statuses to `ApiError` and parses the body into `T`
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if let Some(err) = ApiError::from_status(response.status()) {
        return Err(err);
    }
    let text = response.text().await.map_err(network_error)?;
    let data = serde_json::from_str(&text)?;
    Ok(data)
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url).send().await.map_err(network_error)?;
    read_json(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = Request::post(url)
        .json(body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    read_json(response).await
}

/// Body of a 2xx response whose payload is optional.
///
/// Empty or malformed bodies yield `T::default()`; the failed parse is logged.
pub fn parse_optional_body<T: DeserializeOwned + Default>(text: &str) -> T {
    if text.trim().is_empty() {
        return T::default();
    }
    match serde_json::from_str(text) {
        Ok(data) => data,
        Err(e) => {
            log::debug!("ignoring unparsable response body: {}", e);
            T::default()
        }
    }
}

/// Multipart POST; the browser sets the boundary header.
///
/// Only the status decides success, see `parse_optional_body`.
pub async fn post_form<T: DeserializeOwned + Default>(
    url: &str,
    form: web_sys::FormData,
) -> Result<T, ApiError> {
    let response = Request::post(url)
        .body(form)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    if let Some(err) = ApiError::from_status(response.status()) {
        return Err(err);
    }
    let text = response.text().await.map_err(network_error)?;
    Ok(parse_optional_body(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Query {
        #[serde(skip_serializing_if = "Option::is_none")]
        product_id: Option<String>,
    }

    #[test]
    fn test_query_string() {
        let qs = serde_qs::to_string(&Query {
            product_id: Some("P1".to_string()),
        })
        .unwrap();
        assert_eq!(qs, "product_id=P1");

        let qs = serde_qs::to_string(&Query { product_id: None }).unwrap();
        assert!(qs.is_empty());
    }

    #[derive(Debug, Default, PartialEq, serde::Deserialize)]
    struct Ack {
        #[serde(default)]
        message: String,
    }

    #[test]
    fn test_optional_body() {
        assert_eq!(parse_optional_body::<Ack>(""), Ack::default());
        assert_eq!(parse_optional_body::<Ack>("  \n"), Ack::default());
        assert_eq!(parse_optional_body::<Ack>("<html>ok</html>"), Ack::default());
        assert_eq!(
            parse_optional_body::<Ack>(r#"{"message": "stored"}"#),
            Ack {
                message: "stored".to_string()
            }
        );
    }
}
