//! Redfish service interaction module
//!
//! This module provides the core functionality for talking to a Redfish
//! service: the HTTP transport wrapper, the session client, and the
//! resource types fetched through it.
//!
//! # Module Structure
//!
//! - [`client`] - Session client bound to one service base URL
//! - [`http`] - HTTP utilities for REST API calls
//! - [`subprocessor`] - The sub-processor resource and its tolerant decode
//!
//! # Example
//!
//! ```ignore
//! use redfish_client::{Client, SubProcessor};
//!
//! async fn example() -> Result<(), redfish_client::Error> {
//!     let client = Client::with_token("https://bmc.example.com", "token")?;
//!     let sub = SubProcessor::get(&client, "/redfish/v1/Systems/1/Processors/1/SubProcessors/1").await?;
//!     let connected = sub.fetch_connected_processors().await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod http;
pub mod subprocessor;
