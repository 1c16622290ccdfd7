//! Tool router, argument checks and tool results.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate};
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use rmcp::{tool, tool_router, ErrorData as McpError};
use schemars::JsonSchema;
use serde::Serialize;
use serde_json::Value;

use super::error::ToolError;
use super::resources::transaction_uri;
use super::types::*;
use super::UpMcpServer;
use crate::models::*;
use crate::pagination::MAX_PAGE_SIZE;

/// Transaction URIs named in the note ahead of a transaction list.
const NOTE_URI_LIMIT: usize = 3;

// ============================================================
// Catalogue
// ============================================================

/// Order tools are listed in; the router itself is unordered.
const TOOL_ORDER: [&str; 12] = [
    "list_accounts",
    "get_account",
    "list_transactions",
    "get_transaction",
    "get_account_transactions",
    "list_categories",
    "get_category",
    "update_transaction_category",
    "list_tags",
    "add_transaction_tags",
    "remove_transaction_tags",
    "ping",
];

/// Every tool this server exposes, with input and output schemas.
pub fn catalogue() -> Vec<Tool> {
    ordered(UpMcpServer::tool_router().list_all())
}

pub(crate) fn ordered(mut tools: Vec<Tool>) -> Vec<Tool> {
    tools.sort_by_key(|tool| {
        TOOL_ORDER
            .iter()
            .position(|name| *name == tool.name)
            .unwrap_or(TOOL_ORDER.len())
    });
    tools
}

fn output_schema<T: JsonSchema>() -> Arc<JsonObject> {
    Arc::new(schema_object::<T>())
}

fn schema_object<T: JsonSchema>() -> JsonObject {
    let schema = schemars::schema_for!(T);
    let mut object = match serde_json::to_value(&schema) {
        Ok(Value::Object(object)) => object,
        _ => JsonObject::new(),
    };
    object.remove("$schema");
    object
}

/// Input schema whose `required` list mirrors the presence check exactly,
/// including nullable fields that schemars would leave out.
fn input_schema<T: ToolRequest>() -> Arc<JsonObject> {
    let mut object = schema_object::<T>();
    if T::REQUIRED.is_empty() {
        object.remove("required");
    } else {
        object.insert("required".to_string(), Value::from(T::REQUIRED.to_vec()));
    }
    Arc::new(object)
}

// ============================================================
// Argument validation
// ============================================================

/// Check required arguments, then deserialize into the typed request.
pub fn parse_arguments<T: ToolRequest>(arguments: JsonObject) -> Result<T, ToolError> {
    for &field in T::REQUIRED {
        let present = match arguments.get(field) {
            None => false,
            Some(Value::Null) => T::NULLABLE.contains(&field),
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(_) => true,
        };
        if !present {
            return Err(ToolError::MissingArgument(field));
        }
    }

    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::InvalidArgument(format!("Invalid arguments: {}", e)))
}

fn check_page_size(page_size: Option<u32>) -> Result<Option<u32>, ToolError> {
    match page_size {
        Some(size) if size == 0 || size > MAX_PAGE_SIZE => Err(ToolError::InvalidArgument(
            format!("pageSize must be between 1 and {}", MAX_PAGE_SIZE),
        )),
        other => Ok(other),
    }
}

/// Accept RFC 3339 as-is; widen a bare `YYYY-MM-DD` to midnight UTC.
fn normalize_datetime(field: &str, value: Option<String>) -> Result<Option<String>, ToolError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let value = value.trim();

    if DateTime::parse_from_rfc3339(value).is_ok() {
        return Ok(Some(value.to_string()));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(Some(format!("{}T00:00:00Z", date.format("%Y-%m-%d"))));
    }

    Err(ToolError::InvalidArgument(format!(
        "{} must be an RFC 3339 date-time or a YYYY-MM-DD date",
        field
    )))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl TransactionFilters {
    fn into_query(self, account_id: Option<String>) -> Result<TransactionQuery, ToolError> {
        Ok(TransactionQuery {
            account_id: non_blank(account_id),
            status: self.status,
            since: normalize_datetime("since", self.since)?,
            until: normalize_datetime("until", self.until)?,
            category: non_blank(self.category),
            tag: non_blank(self.tag),
            page_size: check_page_size(self.page_size)?,
            cursor: non_blank(self.cursor),
        })
    }
}

// ============================================================
// Results
// ============================================================

/// A successful tool payload, optionally preceded by a human-readable note.
#[derive(Debug)]
pub struct ToolOutput {
    text: String,
    structured: Value,
}

impl ToolOutput {
    pub fn new<T: Serialize>(payload: &T) -> Result<Self, ToolError> {
        let structured = serde_json::to_value(payload)?;
        let text = serde_json::to_string_pretty(&structured)?;
        Ok(Self { text, structured })
    }

    pub fn with_note(mut self, note: Option<String>) -> Self {
        if let Some(note) = note {
            self.text = format!("{}\n\n{}", note, self.text);
        }
        self
    }

    pub fn into_result(self) -> CallToolResult {
        let mut result = CallToolResult::success(vec![Content::text(self.text)]);
        result.structured_content = Some(self.structured);
        result
    }
}

fn error_result(err: &ToolError) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!("Error: {}", err))])
}

fn transactions_note(transactions: &[Resource]) -> Option<String> {
    if transactions.is_empty() {
        return None;
    }

    let mut uris: Vec<String> = transactions
        .iter()
        .take(NOTE_URI_LIMIT)
        .map(|t| transaction_uri(&t.id))
        .collect();
    if transactions.len() > NOTE_URI_LIMIT {
        uris.push("...".to_string());
    }

    Some(format!(
        "Note: Individual transactions can be accessed via resources: {}",
        uris.join(", ")
    ))
}

fn transaction_note(transaction: &Resource) -> String {
    let mut note = format!(
        "Note: This transaction is also available via resource: {}",
        transaction_uri(&transaction.id)
    );
    let tags = transaction.relationship_ids("tags");
    if !tags.is_empty() {
        note.push_str(&format!(" (tags: {})", tags.join(", ")));
    }
    note
}

/// Turn a typed tool outcome into the call result; failures become `isError`.
fn respond(
    tool: &str,
    outcome: Result<ToolOutput, ToolError>,
) -> Result<CallToolResult, McpError> {
    Ok(match outcome {
        Ok(output) => output.into_result(),
        Err(e) => {
            tracing::warn!(tool, error = %e, "Tool call failed");
            error_result(&e)
        }
    })
}

/// Result for a name the router does not know.
pub(crate) fn unknown_tool(name: &str) -> CallToolResult {
    let err = ToolError::UnknownTool(name.to_string());
    tracing::warn!(tool = name, error = %err, "Tool call failed");
    error_result(&err)
}

// ============================================================
// Tools
// ============================================================

#[tool_router(vis = "pub(crate)")]
impl UpMcpServer {
    #[tool(
        name = "list_accounts",
        description = "List all Up bank accounts for the authenticated user",
        input_schema = input_schema::<ListAccountsRequest>(),
        output_schema = output_schema::<PaginatedList>()
    )]
    pub async fn list_accounts(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        respond("list_accounts", self.accounts(params.0).await)
    }

    #[tool(
        name = "get_account",
        description = "Get details of a specific Up bank account by ID",
        input_schema = input_schema::<GetAccountRequest>(),
        output_schema = output_schema::<Document>()
    )]
    pub async fn get_account(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        respond("get_account", self.account(params.0).await)
    }

    #[tool(
        name = "list_transactions",
        description = "List transactions from Up bank accounts\n\nThe default account that users are generally asking for is their transaction account. ie. \"What is my latest transaction?\" is likely to be in reference to their transaction account.",
        input_schema = input_schema::<ListTransactionsRequest>(),
        output_schema = output_schema::<PaginatedList>()
    )]
    pub async fn list_transactions(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        respond("list_transactions", self.transactions(params.0).await)
    }

    #[tool(
        name = "get_transaction",
        description = "Get details of a specific transaction by ID",
        input_schema = input_schema::<GetTransactionRequest>(),
        output_schema = output_schema::<Document>()
    )]
    pub async fn get_transaction(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        respond("get_transaction", self.transaction(params.0).await)
    }

    #[tool(
        name = "get_account_transactions",
        description = "Get transactions for a specific account",
        input_schema = input_schema::<GetAccountTransactionsRequest>(),
        output_schema = output_schema::<PaginatedList>()
    )]
    pub async fn get_account_transactions(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "get_account_transactions",
            self.account_transactions(params.0).await,
        )
    }

    #[tool(
        name = "list_categories",
        description = "List all categories and subcategories available in Up (not paginated)",
        input_schema = input_schema::<ListCategoriesRequest>(),
        output_schema = output_schema::<ListDocument>()
    )]
    pub async fn list_categories(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        respond("list_categories", self.categories(params.0).await)
    }

    #[tool(
        name = "get_category",
        description = "Get details of a specific category by ID",
        input_schema = input_schema::<GetCategoryRequest>(),
        output_schema = output_schema::<Document>()
    )]
    pub async fn get_category(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        respond("get_category", self.category(params.0).await)
    }

    #[tool(
        name = "update_transaction_category",
        description = "Update or remove the category associated with a transaction (only for settled transactions)",
        input_schema = input_schema::<UpdateTransactionCategoryRequest>(),
        output_schema = output_schema::<CategoryUpdated>()
    )]
    pub async fn update_transaction_category(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "update_transaction_category",
            self.categorize(params.0).await,
        )
    }

    #[tool(
        name = "list_tags",
        description = "List all tags currently in use",
        input_schema = input_schema::<ListTagsRequest>(),
        output_schema = output_schema::<PaginatedList>()
    )]
    pub async fn list_tags(&self, params: Parameters<JsonObject>) -> Result<CallToolResult, McpError> {
        respond("list_tags", self.tags(params.0).await)
    }

    #[tool(
        name = "add_transaction_tags",
        description = "Add one or more tags to a transaction",
        input_schema = input_schema::<TransactionTagsRequest>(),
        output_schema = output_schema::<TagsUpdated>()
    )]
    pub async fn add_transaction_tags(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        respond("add_transaction_tags", self.tag(params.0).await)
    }

    #[tool(
        name = "remove_transaction_tags",
        description = "Remove one or more tags from a transaction",
        input_schema = input_schema::<TransactionTagsRequest>(),
        output_schema = output_schema::<TagsUpdated>()
    )]
    pub async fn remove_transaction_tags(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        respond("remove_transaction_tags", self.untag(params.0).await)
    }

    #[tool(
        name = "ping",
        description = "Test connectivity to the Up API",
        input_schema = input_schema::<PingRequest>(),
        output_schema = output_schema::<PingResponse>()
    )]
    pub async fn ping(&self, params: Parameters<JsonObject>) -> Result<CallToolResult, McpError> {
        respond("ping", self.check_connection(params.0).await)
    }
}

impl UpMcpServer {
    // ============================================================
    // Accounts
    // ============================================================

    async fn accounts(&self, args: JsonObject) -> Result<ToolOutput, ToolError> {
        let req: ListAccountsRequest = parse_arguments(args)?;
        let doc = self
            .client
            .list_accounts(AccountQuery {
                account_type: req.account_type,
                ownership_type: req.ownership_type,
                page_size: check_page_size(req.page_size)?,
                cursor: non_blank(req.cursor),
            })
            .await?;

        ToolOutput::new(&PaginatedList::from(doc))
    }

    async fn account(&self, args: JsonObject) -> Result<ToolOutput, ToolError> {
        let req: GetAccountRequest = parse_arguments(args)?;
        let doc = self.client.get_account(req.account_id.trim()).await?;
        ToolOutput::new(&doc)
    }

    // ============================================================
    // Transactions
    // ============================================================

    async fn transactions(&self, args: JsonObject) -> Result<ToolOutput, ToolError> {
        let req: ListTransactionsRequest = parse_arguments(args)?;
        let query = req.filters.into_query(req.account_id)?;
        let doc = self.client.list_transactions(query).await?;
        let note = transactions_note(&doc.data);
        Ok(ToolOutput::new(&PaginatedList::from(doc))?.with_note(note))
    }

    async fn transaction(&self, args: JsonObject) -> Result<ToolOutput, ToolError> {
        let req: GetTransactionRequest = parse_arguments(args)?;
        let doc = self
            .client
            .get_transaction(req.transaction_id.trim())
            .await?;
        let note = transaction_note(&doc.data);
        Ok(ToolOutput::new(&doc)?.with_note(Some(note)))
    }

    async fn account_transactions(&self, args: JsonObject) -> Result<ToolOutput, ToolError> {
        let req: GetAccountTransactionsRequest = parse_arguments(args)?;
        let query = req.filters.into_query(None)?;
        let doc = self
            .client
            .list_account_transactions(req.account_id.trim(), query)
            .await?;
        let note = transactions_note(&doc.data);
        Ok(ToolOutput::new(&PaginatedList::from(doc))?.with_note(note))
    }

    async fn categorize(&self, args: JsonObject) -> Result<ToolOutput, ToolError> {
        let req: UpdateTransactionCategoryRequest = parse_arguments(args)?;
        let transaction_id = req.transaction_id.trim().to_string();
        let category_id = non_blank(req.category_id).map(|c| c.trim().to_string());

        self.client
            .update_transaction_category(&transaction_id, category_id.as_deref())
            .await?;

        let change = match category_id.as_deref() {
            Some(category) => format!("updated to {}", category),
            None => "removed".to_string(),
        };
        let message = format!(
            "Category {} for transaction {}. View transaction at {}",
            change,
            transaction_id,
            transaction_uri(&transaction_id)
        );

        ToolOutput::new(&CategoryUpdated {
            success: true,
            transaction_id,
            category_id,
            message,
        })
    }

    // ============================================================
    // Categories
    // ============================================================

    async fn categories(&self, args: JsonObject) -> Result<ToolOutput, ToolError> {
        let req: ListCategoriesRequest = parse_arguments(args)?;
        let parent = non_blank(req.parent);
        let doc = self.client.list_categories(parent.as_deref()).await?;
        ToolOutput::new(&doc)
    }

    async fn category(&self, args: JsonObject) -> Result<ToolOutput, ToolError> {
        let req: GetCategoryRequest = parse_arguments(args)?;
        let doc = self.client.get_category(req.category_id.trim()).await?;
        ToolOutput::new(&doc)
    }

    // ============================================================
    // Tags
    // ============================================================

    async fn tags(&self, args: JsonObject) -> Result<ToolOutput, ToolError> {
        let req: ListTagsRequest = parse_arguments(args)?;
        let doc = self
            .client
            .list_tags(TagQuery {
                page_size: check_page_size(req.page_size)?,
                cursor: non_blank(req.cursor),
            })
            .await?;

        ToolOutput::new(&PaginatedList::from(doc))
    }

    async fn tag(&self, args: JsonObject) -> Result<ToolOutput, ToolError> {
        let (transaction_id, tags) = tag_arguments(parse_arguments(args)?)?;
        self.client
            .add_transaction_tags(&transaction_id, &tags)
            .await?;

        let message = format!(
            "Added {} tag(s) to transaction {}. View transaction at {}",
            tags.len(),
            transaction_id,
            transaction_uri(&transaction_id)
        );
        ToolOutput::new(&TagsUpdated {
            success: true,
            transaction_id,
            tags,
            message,
        })
    }

    async fn untag(&self, args: JsonObject) -> Result<ToolOutput, ToolError> {
        let (transaction_id, tags) = tag_arguments(parse_arguments(args)?)?;
        self.client
            .remove_transaction_tags(&transaction_id, &tags)
            .await?;

        let message = format!(
            "Removed {} tag(s) from transaction {}. View transaction at {}",
            tags.len(),
            transaction_id,
            transaction_uri(&transaction_id)
        );
        ToolOutput::new(&TagsUpdated {
            success: true,
            transaction_id,
            tags,
            message,
        })
    }

    // ============================================================
    // Utility
    // ============================================================

    async fn check_connection(&self, args: JsonObject) -> Result<ToolOutput, ToolError> {
        let _: PingRequest = parse_arguments(args)?;
        let success = self.client.ping().await;
        ToolOutput::new(&PingResponse {
            success,
            message: if success {
                "Connection successful"
            } else {
                "Connection failed"
            }
            .to_string(),
        })
    }
}

fn tag_arguments(req: TransactionTagsRequest) -> Result<(String, Vec<String>), ToolError> {
    let tags: Vec<String> = req.tags.iter().map(|t| t.trim().to_string()).collect();
    if tags.iter().any(String::is_empty) {
        return Err(ToolError::InvalidArgument(
            "tags must not contain empty tag IDs".to_string(),
        ));
    }
    Ok((req.transaction_id.trim().to_string(), tags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            _ => panic!("arguments must be an object"),
        }
    }

    #[test]
    fn catalogue_lists_every_tool_once() {
        let names: Vec<String> = catalogue().iter().map(|t| t.name.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "list_accounts",
                "get_account",
                "list_transactions",
                "get_transaction",
                "get_account_transactions",
                "list_categories",
                "get_category",
                "update_transaction_category",
                "list_tags",
                "add_transaction_tags",
                "remove_transaction_tags",
                "ping",
            ]
        );
    }

    #[test]
    fn router_routes_every_listed_tool() {
        let router = UpMcpServer::tool_router();
        assert_eq!(router.list_all().len(), TOOL_ORDER.len());
        for name in TOOL_ORDER {
            assert!(router.has_route(name), "no route for {}", name);
        }
        assert!(!router.has_route("transfer_money"));
    }

    #[test]
    fn tool_descriptions_are_set() {
        for tool in catalogue() {
            let description = tool.description.as_deref().unwrap_or_default();
            assert!(!description.is_empty(), "{}", tool.name);
        }
        let tools = catalogue();
        let list = tools.iter().find(|t| t.name == "list_transactions").unwrap();
        assert!(list
            .description
            .as_deref()
            .unwrap()
            .contains("\"What is my latest transaction?\""));
    }

    #[test]
    fn unknown_tool_is_an_error_result() {
        let result = unknown_tool("transfer_money");
        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            result.content[0].as_text().unwrap().text,
            "Error: Unknown tool: transfer_money"
        );
    }

    #[test]
    fn input_schemas_declare_required_fields() {
        let tools = catalogue();
        let required = |name: &str| -> Option<Value> {
            let tool = tools.iter().find(|t| t.name == name).unwrap();
            tool.input_schema.get("required").cloned()
        };

        assert_eq!(required("get_account"), Some(json!(["accountId"])));
        assert_eq!(
            required("update_transaction_category"),
            Some(json!(["transactionId", "categoryId"]))
        );
        assert_eq!(
            required("add_transaction_tags"),
            Some(json!(["transactionId", "tags"]))
        );
        assert_eq!(required("list_accounts"), None);
        assert_eq!(required("ping"), None);
    }

    #[test]
    fn schemas_are_objects_with_properties() {
        for tool in catalogue() {
            assert_eq!(tool.input_schema.get("type"), Some(&json!("object")), "{}", tool.name);
            assert!(!tool.input_schema.contains_key("$schema"), "{}", tool.name);
            let output = tool.output_schema.as_ref().expect("output schema");
            assert_eq!(output.get("type"), Some(&json!("object")), "{}", tool.name);
        }
    }

    #[test]
    fn list_transaction_schema_includes_flattened_filters() {
        let tools = catalogue();
        let tool = tools.iter().find(|t| t.name == "list_transactions").unwrap();
        let properties = tool.input_schema["properties"].as_object().unwrap();

        for field in ["accountId", "status", "since", "until", "category", "tag", "pageSize", "cursor"] {
            assert!(properties.contains_key(field), "missing {}", field);
        }
    }

    #[test]
    fn parse_reports_missing_required_field() {
        let err = parse_arguments::<GetAccountRequest>(args(json!({}))).unwrap_err();
        assert_eq!(err.to_string(), "accountId is required");

        let err = parse_arguments::<GetAccountRequest>(JsonObject::new()).unwrap_err();
        assert_eq!(err.to_string(), "accountId is required");
    }

    #[test]
    fn parse_treats_blank_and_null_as_missing() {
        let err = parse_arguments::<GetAccountRequest>(args(json!({ "accountId": "  " }))).unwrap_err();
        assert_eq!(err.to_string(), "accountId is required");

        let err = parse_arguments::<GetAccountRequest>(args(json!({ "accountId": null }))).unwrap_err();
        assert_eq!(err.to_string(), "accountId is required");
    }

    #[test]
    fn parse_allows_null_for_nullable_fields_but_not_absence() {
        let req = parse_arguments::<UpdateTransactionCategoryRequest>(args(json!({
            "transactionId": "tx-1",
            "categoryId": null
        })))
        .unwrap();
        assert!(req.category_id.is_none());

        let err = parse_arguments::<UpdateTransactionCategoryRequest>(args(json!({
            "transactionId": "tx-1"
        })))
        .unwrap_err();
        assert_eq!(err.to_string(), "categoryId is required");
    }

    #[test]
    fn parse_reports_type_errors() {
        let err = parse_arguments::<TransactionTagsRequest>(args(json!({
            "transactionId": "tx-1",
            "tags": "Holiday"
        })))
        .unwrap_err();
        assert!(err.to_string().starts_with("Invalid arguments:"));
    }

    #[test]
    fn page_size_must_be_within_api_limits() {
        assert_eq!(check_page_size(None).unwrap(), None);
        assert_eq!(check_page_size(Some(100)).unwrap(), Some(100));
        assert!(check_page_size(Some(0)).is_err());
        assert_eq!(
            check_page_size(Some(101)).unwrap_err().to_string(),
            "pageSize must be between 1 and 100"
        );
    }

    #[test]
    fn dates_are_normalized() {
        assert_eq!(
            normalize_datetime("since", Some("2024-03-01T10:00:00+10:00".to_string())).unwrap(),
            Some("2024-03-01T10:00:00+10:00".to_string())
        );
        assert_eq!(
            normalize_datetime("since", Some("2024-03-01".to_string())).unwrap(),
            Some("2024-03-01T00:00:00Z".to_string())
        );
        assert_eq!(
            normalize_datetime("until", Some("yesterday".to_string()))
                .unwrap_err()
                .to_string(),
            "until must be an RFC 3339 date-time or a YYYY-MM-DD date"
        );
    }

    #[test]
    fn transactions_note_names_at_most_three_uris() {
        let resources: Vec<Resource> = (1..=4)
            .map(|i| serde_json::from_value(json!({ "type": "transactions", "id": format!("t{}", i) })).unwrap())
            .collect();

        assert_eq!(
            transactions_note(&resources[..2]).unwrap(),
            "Note: Individual transactions can be accessed via resources: up://transaction/t1, up://transaction/t2"
        );
        assert_eq!(
            transactions_note(&resources).unwrap(),
            "Note: Individual transactions can be accessed via resources: up://transaction/t1, up://transaction/t2, up://transaction/t3, ..."
        );
        assert!(transactions_note(&[]).is_none());
    }

    #[test]
    fn tag_arguments_reject_blank_ids() {
        let err = tag_arguments(TransactionTagsRequest {
            transaction_id: "tx-1".to_string(),
            tags: vec!["Holiday".to_string(), " ".to_string()],
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "tags must not contain empty tag IDs");
    }
}
