use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Query-string pairs in the order they are appended to a request.
pub type QueryParams = Vec<(&'static str, String)>;

/// The kind of an Up account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Saver,
    Transactional,
    HomeLoan,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Saver => "SAVER",
            Self::Transactional => "TRANSACTIONAL",
            Self::HomeLoan => "HOME_LOAN",
        }
    }
}

/// Whether an account belongs to one person or is shared.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OwnershipType {
    Individual,
    Joint,
}

impl OwnershipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "INDIVIDUAL",
            Self::Joint => "JOINT",
        }
    }
}

/// Settlement state of a transaction.
///
/// - `Held`: pending, amounts may still change
/// - `Settled`: final; only settled transactions can be re-categorized
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Held,
    Settled,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Held => "HELD",
            Self::Settled => "SETTLED",
        }
    }
}

/// Filters for `GET /accounts`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountQuery {
    pub account_type: Option<AccountType>,
    pub ownership_type: Option<OwnershipType>,
    pub page_size: Option<u32>,
    pub cursor: Option<String>,
}

impl AccountQuery {
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if let Some(t) = self.account_type {
            params.push(("filter[accountType]", t.as_str().to_string()));
        }
        if let Some(o) = self.ownership_type {
            params.push(("filter[ownershipType]", o.as_str().to_string()));
        }
        push_page(&mut params, self.page_size, self.cursor.as_deref());
        params
    }
}

/// Filters for `GET /transactions` and `GET /accounts/{id}/transactions`.
///
/// `since` and `until` are RFC 3339 date-times and are passed through as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionQuery {
    /// Restricts the listing to one account.
    pub account_id: Option<String>,
    pub status: Option<TransactionStatus>,
    pub since: Option<String>,
    pub until: Option<String>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub page_size: Option<u32>,
    pub cursor: Option<String>,
}

impl TransactionQuery {
    /// Query pairs for the request. `account_id` selects the path instead.
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if let Some(s) = self.status {
            params.push(("filter[status]", s.as_str().to_string()));
        }
        if let Some(ref since) = self.since {
            params.push(("filter[since]", since.clone()));
        }
        if let Some(ref until) = self.until {
            params.push(("filter[until]", until.clone()));
        }
        if let Some(ref category) = self.category {
            params.push(("filter[category]", category.clone()));
        }
        if let Some(ref tag) = self.tag {
            params.push(("filter[tag]", tag.clone()));
        }
        push_page(&mut params, self.page_size, self.cursor.as_deref());
        params
    }
}

/// Paging for `GET /tags`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagQuery {
    pub page_size: Option<u32>,
    pub cursor: Option<String>,
}

impl TagQuery {
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        push_page(&mut params, self.page_size, self.cursor.as_deref());
        params
    }
}

fn push_page(params: &mut QueryParams, page_size: Option<u32>, cursor: Option<&str>) {
    if let Some(size) = page_size {
        params.push(("page[size]", size.to_string()));
    }
    if let Some(cursor) = cursor {
        params.push(("page[after]", cursor.to_string()));
    }
}
