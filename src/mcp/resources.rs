//! `up://` resources: aggregated collections plus per-item templates.

use chrono::{Duration, SecondsFormat, Utc};
use rmcp::model::{
    AnnotateAble, RawResource, RawResourceTemplate, ReadResourceResult, Resource as McpResource,
    ResourceContents, ResourceTemplate,
};
use rmcp::ErrorData as McpError;
use serde::Serialize;

use super::error::ToolError;
use super::UpMcpServer;
use crate::models::*;
use crate::pagination::{fetch_all_pages, DEFAULT_MAX_PAGES, MAX_PAGE_SIZE};

pub const ACCOUNTS_URI: &str = "up://accounts";
pub const TRANSACTIONS_URI: &str = "up://transactions";
pub const RECENT_TRANSACTIONS_URI: &str = "up://transactions/recent";
pub const CATEGORIES_URI: &str = "up://categories";
pub const TAGS_URI: &str = "up://tags";

const ACCOUNT_PREFIX: &str = "up://account/";
const TRANSACTION_PREFIX: &str = "up://transaction/";

const JSON_MIME: &str = "application/json";

/// How far back `up://transactions` reaches.
const TRANSACTIONS_WINDOW_DAYS: i64 = 30;
const RECENT_TRANSACTIONS: u32 = 10;

pub fn account_uri(id: &str) -> String {
    format!("{}{}", ACCOUNT_PREFIX, id)
}

pub fn transaction_uri(id: &str) -> String {
    format!("{}{}", TRANSACTION_PREFIX, id)
}

/// A readable `up://` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpResource {
    Accounts,
    Transactions,
    RecentTransactions,
    Categories,
    Tags,
    Account(String),
    Transaction(String),
}

impl UpResource {
    pub fn parse(uri: &str) -> Option<Self> {
        match uri {
            ACCOUNTS_URI => return Some(Self::Accounts),
            TRANSACTIONS_URI => return Some(Self::Transactions),
            RECENT_TRANSACTIONS_URI => return Some(Self::RecentTransactions),
            CATEGORIES_URI => return Some(Self::Categories),
            TAGS_URI => return Some(Self::Tags),
            _ => {}
        }

        if let Some(id) = uri.strip_prefix(ACCOUNT_PREFIX) {
            return item_id(id).map(Self::Account);
        }
        if let Some(id) = uri.strip_prefix(TRANSACTION_PREFIX) {
            return item_id(id).map(Self::Transaction);
        }
        None
    }
}

fn item_id(id: &str) -> Option<String> {
    if id.is_empty() || id.contains('/') {
        None
    } else {
        Some(id.to_string())
    }
}

// ============================================================
// Catalogue
// ============================================================

pub fn catalogue() -> Vec<McpResource> {
    vec![
        static_resource(ACCOUNTS_URI, "Up Accounts", "List of all Up bank accounts"),
        static_resource(
            TRANSACTIONS_URI,
            "Up Transactions",
            "Transactions from the last 30 days across all accounts",
        ),
        static_resource(
            RECENT_TRANSACTIONS_URI,
            "Recent Transactions",
            "The 10 most recent transactions across all accounts",
        ),
        static_resource(
            CATEGORIES_URI,
            "Up Categories",
            "List of all transaction categories",
        ),
        static_resource(TAGS_URI, "Up Tags", "List of all transaction tags"),
    ]
}

fn static_resource(uri: &str, name: &str, description: &str) -> McpResource {
    let mut raw = RawResource::new(uri, name);
    raw.description = Some(description.to_string());
    raw.mime_type = Some(JSON_MIME.to_string());
    raw.no_annotation()
}

pub fn templates() -> Vec<ResourceTemplate> {
    vec![
        resource_template(
            "up://account/{accountId}",
            "Up Account",
            "Details of a specific Up bank account",
        ),
        resource_template(
            "up://transaction/{transactionId}",
            "Up Transaction",
            "Details of a specific transaction",
        ),
    ]
}

fn resource_template(uri_template: &str, name: &str, description: &str) -> ResourceTemplate {
    RawResourceTemplate {
        uri_template: uri_template.to_string(),
        name: name.to_string(),
        title: None,
        description: Some(description.to_string()),
        mime_type: Some(JSON_MIME.to_string()),
    }
    .no_annotation()
}

// ============================================================
// Reads
// ============================================================

#[derive(Serialize)]
struct Collection {
    data: Vec<Resource>,
}

impl UpMcpServer {
    /// Read one `up://` URI as a single JSON text content.
    pub async fn handle_read_resource(&self, uri: &str) -> Result<ReadResourceResult, McpError> {
        let resource = UpResource::parse(uri).ok_or_else(|| {
            McpError::resource_not_found(format!("Unknown resource URI: {}", uri), None)
        })?;

        tracing::debug!(uri, "Reading resource");

        let text = self.read(resource).await.map_err(|e| {
            tracing::warn!(uri, error = %e, "Resource read failed");
            McpError::internal_error(format!("Failed to read resource {}: {}", uri, e), None)
        })?;

        let mut contents = ResourceContents::text(text, uri);
        if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
            *mime_type = Some(JSON_MIME.to_string());
        }

        Ok(ReadResourceResult {
            contents: vec![contents],
        })
    }

    async fn read(&self, resource: UpResource) -> Result<String, ToolError> {
        let client = &self.client;

        let text = match resource {
            UpResource::Accounts => {
                let data = fetch_all_pages(DEFAULT_MAX_PAGES, |cursor| {
                    client.list_accounts(AccountQuery {
                        page_size: Some(MAX_PAGE_SIZE),
                        cursor,
                        ..Default::default()
                    })
                })
                .await?;
                to_json(&Collection { data })?
            }
            UpResource::Transactions => {
                let since = (Utc::now() - Duration::days(TRANSACTIONS_WINDOW_DAYS))
                    .to_rfc3339_opts(SecondsFormat::Secs, true);
                let data = fetch_all_pages(DEFAULT_MAX_PAGES, |cursor| {
                    client.list_transactions(TransactionQuery {
                        since: Some(since.clone()),
                        page_size: Some(MAX_PAGE_SIZE),
                        cursor,
                        ..Default::default()
                    })
                })
                .await?;
                to_json(&Collection { data })?
            }
            UpResource::RecentTransactions => {
                let doc = client
                    .list_transactions(TransactionQuery {
                        page_size: Some(RECENT_TRANSACTIONS),
                        ..Default::default()
                    })
                    .await?;
                to_json(&doc)?
            }
            UpResource::Categories => to_json(&client.list_categories(None).await?)?,
            UpResource::Tags => {
                let data = fetch_all_pages(DEFAULT_MAX_PAGES, |cursor| {
                    client.list_tags(TagQuery {
                        page_size: Some(MAX_PAGE_SIZE),
                        cursor,
                    })
                })
                .await?;
                to_json(&Collection { data })?
            }
            UpResource::Account(id) => to_json(&client.get_account(&id).await?)?,
            UpResource::Transaction(id) => to_json(&client.get_transaction(&id).await?)?,
        };

        Ok(text)
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ToolError> {
    Ok(serde_json::to_string_pretty(value)?)
}
