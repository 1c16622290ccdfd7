//! Request and response types for MCP tools.

use schemars::JsonSchema;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::*;
use crate::pagination::extract_cursor;

/// A tool's typed arguments.
///
/// Presence of `REQUIRED` fields is checked on the raw argument object
/// before deserializing, so a missing field reports `<field> is required`
/// rather than a serde error.
pub trait ToolRequest: DeserializeOwned + JsonSchema {
    /// Arguments that must be present and not blank.
    const REQUIRED: &'static [&'static str] = &[];
    /// Required arguments for which an explicit `null` is meaningful.
    const NULLABLE: &'static [&'static str] = &[];
}

// ============================================================
// Request Types
// ============================================================

/// A count that may arrive as `10` or `10.0`; fractions are rejected.
fn whole_number<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let whole = number.as_u64().or_else(|| {
        number
            .as_f64()
            .filter(|n| n.fract() == 0.0 && *n >= 0.0)
            .map(|n| n as u64)
    });

    match whole {
        Some(n) => Ok(Some(u32::try_from(n).unwrap_or(u32::MAX))),
        None => Err(D::Error::custom(format!(
            "expected a whole number, found {}",
            number
        ))),
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListAccountsRequest {
    #[schemars(description = "Filter by account type (SAVER, TRANSACTIONAL or HOME_LOAN)")]
    pub account_type: Option<AccountType>,
    #[schemars(description = "Filter by ownership (INDIVIDUAL or JOINT)")]
    pub ownership_type: Option<OwnershipType>,
    #[schemars(description = "Number of records to return (max 100)")]
    #[serde(default, deserialize_with = "whole_number")]
    pub page_size: Option<u32>,
    #[schemars(description = "Pagination cursor to fetch the next page of results")]
    pub cursor: Option<String>,
}

impl ToolRequest for ListAccountsRequest {}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetAccountRequest {
    #[schemars(description = "The unique identifier for the account")]
    pub account_id: String,
}

impl ToolRequest for GetAccountRequest {
    const REQUIRED: &'static [&'static str] = &["accountId"];
}

/// Filters shared by the transaction listing tools.
#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilters {
    #[schemars(description = "Filter by status: HELD (pending) or SETTLED")]
    pub status: Option<TransactionStatus>,
    #[schemars(
        description = "Only transactions on or after this time (RFC 3339, or YYYY-MM-DD for midnight UTC)"
    )]
    pub since: Option<String>,
    #[schemars(
        description = "Only transactions before this time (RFC 3339, or YYYY-MM-DD for midnight UTC)"
    )]
    pub until: Option<String>,
    #[schemars(description = "Filter by category ID, e.g. 'groceries'")]
    pub category: Option<String>,
    #[schemars(description = "Filter by tag ID")]
    pub tag: Option<String>,
    #[schemars(description = "Number of records to return (max 100)")]
    #[serde(default, deserialize_with = "whole_number")]
    pub page_size: Option<u32>,
    #[schemars(description = "Pagination cursor to fetch the next page of results")]
    pub cursor: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListTransactionsRequest {
    #[schemars(description = "Filter transactions by account ID")]
    pub account_id: Option<String>,
    #[serde(flatten)]
    pub filters: TransactionFilters,
}

impl ToolRequest for ListTransactionsRequest {}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTransactionRequest {
    #[schemars(description = "The unique identifier for the transaction")]
    pub transaction_id: String,
}

impl ToolRequest for GetTransactionRequest {
    const REQUIRED: &'static [&'static str] = &["transactionId"];
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetAccountTransactionsRequest {
    #[schemars(description = "The account ID to get transactions for")]
    pub account_id: String,
    #[serde(flatten)]
    pub filters: TransactionFilters,
}

impl ToolRequest for GetAccountTransactionsRequest {
    const REQUIRED: &'static [&'static str] = &["accountId"];
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListCategoriesRequest {
    #[schemars(description = "Filter by parent category ID")]
    pub parent: Option<String>,
}

impl ToolRequest for ListCategoriesRequest {}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetCategoryRequest {
    #[schemars(description = "The unique identifier for the category")]
    pub category_id: String,
}

impl ToolRequest for GetCategoryRequest {
    const REQUIRED: &'static [&'static str] = &["categoryId"];
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransactionCategoryRequest {
    #[schemars(description = "The transaction ID to update")]
    pub transaction_id: String,
    #[schemars(description = "The category ID to assign, or null to remove the category")]
    pub category_id: Option<String>,
}

impl ToolRequest for UpdateTransactionCategoryRequest {
    const REQUIRED: &'static [&'static str] = &["transactionId", "categoryId"];
    const NULLABLE: &'static [&'static str] = &["categoryId"];
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListTagsRequest {
    #[schemars(description = "Number of records to return (max 100)")]
    #[serde(default, deserialize_with = "whole_number")]
    pub page_size: Option<u32>,
    #[schemars(description = "Pagination cursor to fetch the next page of results")]
    pub cursor: Option<String>,
}

impl ToolRequest for ListTagsRequest {}

/// Arguments for both `add_transaction_tags` and `remove_transaction_tags`.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionTagsRequest {
    #[schemars(description = "The transaction ID to tag or untag")]
    pub transaction_id: String,
    #[schemars(description = "Tag IDs to add or remove")]
    pub tags: Vec<String>,
}

impl ToolRequest for TransactionTagsRequest {
    const REQUIRED: &'static [&'static str] = &["transactionId", "tags"];
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct PingRequest {}

impl ToolRequest for PingRequest {}

// ============================================================
// Response Types
// ============================================================

/// Cursors derived from a list response's links.
#[derive(Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Cursor for the next page of results, or null if no more pages
    pub next_cursor: Option<String>,
    /// Cursor for the previous page of results, or null on the first page
    pub prev_cursor: Option<String>,
}

/// A page of resources plus the cursors needed to move between pages.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PaginatedList {
    pub data: Vec<Resource>,
    /// JSON:API pagination links as returned by Up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<PageLinks>,
    pub pagination: Pagination,
}

impl From<ListDocument> for PaginatedList {
    fn from(doc: ListDocument) -> Self {
        let pagination = Pagination {
            next_cursor: extract_cursor(doc.next_link()),
            prev_cursor: extract_cursor(doc.prev_link()),
        };
        Self {
            data: doc.data,
            links: doc.links,
            pagination,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdated {
    pub success: bool,
    /// The transaction that was updated
    pub transaction_id: String,
    /// The category that was set, or null if it was removed
    pub category_id: Option<String>,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TagsUpdated {
    pub success: bool,
    /// The transaction that was updated
    pub transaction_id: String,
    /// The tag IDs that were added or removed
    pub tags: Vec<String>,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PingResponse {
    /// Whether the Up API is reachable with the configured token
    pub success: bool,
    pub message: String,
}
