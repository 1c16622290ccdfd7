//! HTTP client for the Up Banking API.
//!
//! Every request carries the bearer token plus JSON `Content-Type`/`Accept`
//! headers. Non-2xx responses become [`ClientError::Api`]; empty success
//! bodies decode as an empty JSON object.

use std::fmt;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::*;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.up.com.au/api/v1";

const JSON_MIME: &str = "application/json";

/// HTTP client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("API token is required and cannot be empty")]
    MissingToken,

    #[error("API token contains characters that are not allowed in an HTTP header")]
    InvalidToken,

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Up API request failed: {status} {status_text}{}", detail_suffix(.detail))]
    Api {
        status: u16,
        status_text: String,
        detail: Option<String>,
    },

    #[error("Failed to decode Up API response: {0}")]
    Decode(#[from] serde_json::Error),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(": {}", d))
        .unwrap_or_default()
}

impl ClientError {
    fn api(status: StatusCode, body: &str) -> Self {
        Self::Api {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            detail: error_detail(body),
        }
    }
}

/// JSON:API error document, `{"errors": [{"title": ..., "detail": ...}]}`.
#[derive(Deserialize)]
struct ErrorDocument {
    errors: Vec<ErrorObject>,
}

#[derive(Deserialize)]
struct ErrorObject {
    title: Option<String>,
    detail: Option<String>,
}

fn error_detail(body: &str) -> Option<String> {
    let doc: ErrorDocument = serde_json::from_str(body).ok()?;
    let first = doc.errors.into_iter().next()?;
    first.detail.or(first.title)
}

/// HTTP client for the Up API.
///
/// Cheap to clone; the token and base URL never change after construction.
#[derive(Clone)]
pub struct UpClient {
    base_url: Url,
    headers: HeaderMap,
    client: Client,
}

impl UpClient {
    /// Create a client for the production API.
    pub fn new(token: &str) -> Result<Self, ClientError> {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// Create a client against another API root, e.g. a local test double.
    pub fn with_base_url(token: &str, base_url: &str) -> Result<Self, ClientError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ClientError::MissingToken);
        }

        let base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| ClientError::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_MIME));
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_MIME));

        Ok(Self {
            base_url,
            headers,
            client: Client::new(),
        })
    }

    /// Headers attached to every request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot-be-a-base URLs are rejected in the constructor
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send<B>(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&'static str, String)],
        body: Option<&B>,
    ) -> Result<Value, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(segments);
        tracing::debug!(method = %method, path = url.path(), "Up API request");

        let mut req = self
            .client
            .request(method, url)
            .headers(self.headers.clone());
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await?;
        self.handle_response(response).await
    }

    /// Handle response, converting HTTP errors to ClientError.
    async fn handle_response(&self, response: reqwest::Response) -> Result<Value, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), "Up API request failed");
            return Err(ClientError::api(status, &body));
        }

        // PATCH/DELETE relationship endpoints answer 204 with no body
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Value::Object(Map::new()));
        }
        Ok(serde_json::from_str(&body)?)
    }

    // ============================================================
    // Generic verbs
    // ============================================================

    pub async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&'static str, String)],
    ) -> Result<T, ClientError> {
        let value = self
            .send::<()>(Method::GET, segments, query, None)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn post<T, B>(&self, segments: &[&str], body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let value = self.send(Method::POST, segments, &[], Some(body)).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn patch<T, B>(&self, segments: &[&str], body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let value = self.send(Method::PATCH, segments, &[], Some(body)).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn delete<T, B>(&self, segments: &[&str], body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let value = self.send(Method::DELETE, segments, &[], Some(body)).await?;
        Ok(serde_json::from_value(value)?)
    }

    // ============================================================
    // Accounts
    // ============================================================

    /// List accounts, one page at a time.
    pub async fn list_accounts(&self, query: AccountQuery) -> Result<ListDocument, ClientError> {
        self.get(&["accounts"], &query.to_params()).await
    }

    pub async fn get_account(&self, id: &str) -> Result<Document, ClientError> {
        self.get(&["accounts", id], &[]).await
    }

    // ============================================================
    // Transactions
    // ============================================================

    /// List transactions across all accounts, or one account when
    /// `query.account_id` is set.
    pub async fn list_transactions(
        &self,
        query: TransactionQuery,
    ) -> Result<ListDocument, ClientError> {
        let params = query.to_params();
        match query.account_id.as_deref() {
            Some(account_id) => {
                self.get(&["accounts", account_id, "transactions"], &params)
                    .await
            }
            None => self.get(&["transactions"], &params).await,
        }
    }

    pub async fn list_account_transactions(
        &self,
        account_id: &str,
        query: TransactionQuery,
    ) -> Result<ListDocument, ClientError> {
        self.list_transactions(TransactionQuery {
            account_id: Some(account_id.to_string()),
            ..query
        })
        .await
    }

    pub async fn get_transaction(&self, id: &str) -> Result<Document, ClientError> {
        self.get(&["transactions", id], &[]).await
    }

    /// Set the category of a settled transaction, or clear it with `None`.
    pub async fn update_transaction_category(
        &self,
        transaction_id: &str,
        category_id: Option<&str>,
    ) -> Result<(), ClientError> {
        let body = Relationship {
            data: category_id.map(ResourceIdentifier::category),
        };
        self.patch::<Value, _>(
            &["transactions", transaction_id, "relationships", "category"],
            &body,
        )
        .await?;
        Ok(())
    }

    pub async fn add_transaction_tags(
        &self,
        transaction_id: &str,
        tags: &[String],
    ) -> Result<(), ClientError> {
        let body = tag_relationship(tags);
        self.post::<Value, _>(
            &["transactions", transaction_id, "relationships", "tags"],
            &body,
        )
        .await?;
        Ok(())
    }

    pub async fn remove_transaction_tags(
        &self,
        transaction_id: &str,
        tags: &[String],
    ) -> Result<(), ClientError> {
        let body = tag_relationship(tags);
        self.delete::<Value, _>(
            &["transactions", transaction_id, "relationships", "tags"],
            &body,
        )
        .await?;
        Ok(())
    }

    // ============================================================
    // Categories
    // ============================================================

    /// List categories. Not paginated; `parent` narrows to one parent's children.
    pub async fn list_categories(&self, parent: Option<&str>) -> Result<ListDocument, ClientError> {
        let params: Vec<(&'static str, String)> = parent
            .map(|p| vec![("filter[parent]", p.to_string())])
            .unwrap_or_default();
        self.get(&["categories"], &params).await
    }

    pub async fn get_category(&self, id: &str) -> Result<Document, ClientError> {
        self.get(&["categories", id], &[]).await
    }

    // ============================================================
    // Tags
    // ============================================================

    pub async fn list_tags(&self, query: TagQuery) -> Result<ListDocument, ClientError> {
        self.get(&["tags"], &query.to_params()).await
    }

    // ============================================================
    // Utility
    // ============================================================

    /// Connectivity check. Any failure, including a bad token, reports `false`.
    pub async fn ping(&self) -> bool {
        match self.get::<Value>(&["util", "ping"], &[]).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Up API ping failed");
                false
            }
        }
    }
}

fn tag_relationship(tags: &[String]) -> Relationship<Vec<ResourceIdentifier>> {
    Relationship {
        data: tags.iter().map(ResourceIdentifier::tag).collect(),
    }
}

impl fmt::Debug for UpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}
