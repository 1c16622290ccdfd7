//! MCP server exposing the Up Banking API.
//!
//! The crate is a thin adapter: [`config`] loads the personal access token,
//! [`client`] talks to the Up REST API, [`pagination`] walks cursor-paged
//! listings and [`mcp`] maps tool calls and resource reads onto the client.

pub mod client;
pub mod config;
pub mod mcp;
pub mod models;
pub mod pagination;
