//! HTTP API Client
//!
//! Functions for communicating with the expense REST API. Every call
//! collapses transport failures, non-2xx responses and malformed bodies
//! into a single human-readable message; nothing is retried.

use gloo_net::http::Request;

use crate::state::global::{Expense, NewExpense};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("outlay_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// `Authorization` header value for an issued token
fn auth_header(token: &str) -> String {
    format!("Token {}", token)
}

// ============ Wire Types ============

#[derive(Debug, serde::Serialize)]
struct CredentialsRequest {
    username: String,
    password: String,
}

#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    #[serde(default)]
    token: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
}

// ============ API Functions ============

/// Exchange credentials for a session token
pub async fn log_in(username: &str, password: &str) -> Result<String, String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/get-token/", api_base))
        .json(&CredentialsRequest {
            username: username.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Invalid credentials".to_string(),
        });
        return Err(error.error);
    }

    let result: TokenResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    if result.token.is_empty() {
        return Err("No token returned".to_string());
    }

    Ok(result.token)
}

/// Register a new account. Does not log the user in.
pub async fn register(username: &str, password: &str) -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/register/", api_base))
        .json(&CredentialsRequest {
            username: username.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Registration failed".to_string(),
        });
        return Err(error.error);
    }

    Ok(())
}

/// Fetch the full expense collection for the authenticated user
pub async fn fetch_expenses(token: &str) -> Result<Vec<Expense>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/expenses/", api_base))
        .header("Authorization", &auth_header(token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Failed to fetch expenses".to_string(),
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Create a new expense record
pub async fn create_expense(token: &str, payload: &NewExpense) -> Result<Expense, String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/expenses/", api_base))
        .header("Authorization", &auth_header(token))
        .json(payload)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Failed to add expense".to_string(),
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Replace an existing expense record
pub async fn update_expense(
    token: &str,
    id: i64,
    payload: &NewExpense,
) -> Result<Expense, String> {
    let api_base = get_api_base();

    let response = Request::put(&format!("{}/expenses/{}/", api_base, id))
        .header("Authorization", &auth_header(token))
        .json(payload)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Failed to update expense".to_string(),
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Delete an expense record by id
pub async fn delete_expense(token: &str, id: i64) -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::delete(&format!("{}/expenses/{}/", api_base, id))
        .header("Authorization", &auth_header(token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Failed to delete expense".to_string(),
        });
        return Err(error.error);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_header_format() {
        assert_eq!(auth_header("abc123"), "Token abc123");
    }

    #[test]
    fn test_token_response_missing_field() {
        let parsed: TokenResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.token.is_empty());

        let parsed: TokenResponse = serde_json::from_str(r#"{"token": "abc123"}"#).unwrap();
        assert_eq!(parsed.token, "abc123");
    }

    #[test]
    fn test_api_error_body() {
        let parsed: ApiError = serde_json::from_str(r#"{"error": "username taken"}"#).unwrap();
        assert_eq!(parsed.error, "username taken");
    }

    #[test]
    fn test_credentials_payload() {
        let value = serde_json::to_value(CredentialsRequest {
            username: "admin".to_string(),
            password: "password".to_string(),
        })
        .unwrap();
        assert_eq!(value["username"], "admin");
        assert_eq!(value["password"], "password");
    }
}
