//! Typed client core for Redfish hardware inventory APIs.
//!
//! Redfish models hardware as a graph of resources identified by URIs.
//! A resource body mixes inline scalar fields with a `Links` block that
//! points at related resources by URI instead of embedding them. This
//! crate covers the two behaviors that make such a client usable against
//! real services:
//!
//! - **Tolerant decoding**: bodies are decoded against the documented
//!   schema first, and fields services are known to mistype (a clock
//!   speed sent as a string instead of a number) are recovered through a
//!   widened second pass rather than failing the whole resource.
//! - **Lazy link resolution**: relationships are captured as opaque
//!   [`Reference`] values at decode time and fetched only when the caller
//!   explicitly asks, never eagerly.
//!
//! Fetched resources keep a non-owning handle to the [`Client`] that
//! produced them, so they can serve as the starting point for resolving
//! their own references.

pub mod common;
pub mod error;
pub mod redfish;

pub use common::{Entity, Link, ProcessorType, Reference, Status};
pub use error::Error;
pub use redfish::client::Client;
pub use redfish::subprocessor::SubProcessor;
