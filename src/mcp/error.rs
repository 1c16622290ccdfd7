use thiserror::Error;

use crate::client::ClientError;
use crate::pagination::PaginationError;

/// Failure of a single tool call or resource read.
///
/// Tool calls turn this into an `isError` result; it never reaches the
/// protocol layer as a JSON-RPC error.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("{0} is required")]
    MissingArgument(&'static str),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Pagination(#[from] PaginationError),

    #[error("Failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}
