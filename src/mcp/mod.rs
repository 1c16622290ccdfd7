//! MCP server exposing the Up Banking API as tools and resources.

mod error;
mod resources;
mod tools;
mod types;

use std::future::Future;

pub use error::ToolError;
pub use resources::{account_uri, transaction_uri, UpResource};
pub use tools::{catalogue as tool_catalogue, parse_arguments, ToolOutput};
pub use types::*;

use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRouter},
    model::{
        CallToolRequestParam, CallToolResult, ListResourceTemplatesResult, ListResourcesResult,
        ListToolsResult, PaginatedRequestParam, ReadResourceRequestParam, ReadResourceResult,
        ServerInfo,
    },
    service::RequestContext,
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
};

use crate::client::UpClient;

#[derive(Clone)]
pub struct UpMcpServer {
    client: UpClient,
    tool_router: ToolRouter<Self>,
}

impl UpMcpServer {
    pub fn new(client: UpClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }
}

/// Listings fit in one page; a follow-up cursor gets an empty page.
fn is_follow_up(request: &Option<PaginatedRequestParam>) -> bool {
    request.as_ref().and_then(|r| r.cursor.as_ref()).is_some()
}

impl ServerHandler for UpMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: rmcp::model::Implementation {
                name: "up-banking-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: None,
                icons: None,
                website_url: None,
            },
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            instructions: Some(
                r#"Access to the user's Up Banking data: accounts, transactions, categories and tags.

WHEN TO USE WHAT:
- Questions about balances: list_accounts or the up://accounts resource
- "What did I spend on X": list_transactions with category, tag, since/until filters
- "My latest transaction": list_transactions with pageSize 1. Users usually mean their transactional account.
- Recategorising or tagging: update_transaction_category, add_transaction_tags, remove_transaction_tags

PAGINATION:
List tools return pagination.nextCursor. Pass it back as cursor to fetch the next page; null means there are no more pages.

RESOURCES:
up://transaction/{transactionId} and up://account/{accountId} read single items. Collection resources walk every page for you."#
                    .into(),
            ),
            ..Default::default()
        }
    }

    fn list_tools(
        &self,
        request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        let tools = if is_follow_up(&request) {
            Vec::new()
        } else {
            tools::ordered(self.tool_router.list_all())
        };
        std::future::ready(Ok(ListToolsResult::with_all_items(tools)))
    }

    fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move {
            tracing::debug!(tool = %request.name, "Tool call");
            if !self.tool_router.has_route(&request.name) {
                return Ok(tools::unknown_tool(&request.name));
            }
            let context = ToolCallContext::new(self, request, context);
            self.tool_router.call(context).await
        }
    }

    fn list_resources(
        &self,
        request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListResourcesResult, McpError>> + Send + '_ {
        let resources = if is_follow_up(&request) {
            Vec::new()
        } else {
            resources::catalogue()
        };
        std::future::ready(Ok(ListResourcesResult::with_all_items(resources)))
    }

    fn list_resource_templates(
        &self,
        request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListResourceTemplatesResult, McpError>> + Send + '_ {
        let templates = if is_follow_up(&request) {
            Vec::new()
        } else {
            resources::templates()
        };
        std::future::ready(Ok(ListResourceTemplatesResult::with_all_items(templates)))
    }

    fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ReadResourceResult, McpError>> + Send + '_ {
        async move { self.handle_read_resource(&request.uri).await }
    }
}

/// Run the MCP server over stdio until the client disconnects.
pub async fn run_stdio_server(client: UpClient) -> anyhow::Result<()> {
    use tokio::io::{stdin, stdout};

    tracing::info!("Starting Up Banking MCP server via stdio");

    let service = UpMcpServer::new(client);
    let server = service.serve((stdin(), stdout())).await?;

    let quit_reason = server.waiting().await?;
    tracing::info!("MCP server stopped: {:?}", quit_reason);

    Ok(())
}
