//! Core types, errors and helpers for the MCP framework.
//!
//! This crate provides the foundations shared by the extraction and code
//! generation crates, and the runtime helpers that hand-written MCP
//! servers reuse.
//!
//! # Architecture
//!
//! - Error hierarchy with stable wire-level error codes
//! - Error handler mapping errors to responses, with custom overrides
//! - Validation of URL, port and log level configuration values
//! - Validated name types (`ServerName`, `ToolName`)
//! - Authentication header providers
//! - Tool response envelope
//! - Service-layer abstractions (trait, registry, response wrapper)

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod error;
mod handler;
mod response;
mod types;

pub mod auth;
pub mod service;
pub mod validate;

pub use error::{Error, ErrorCode, ErrorResponse, Result};
pub use handler::ErrorHandler;
pub use response::{ContentBlock, ToolResponse};
pub use types::{ServerName, ToolName};
