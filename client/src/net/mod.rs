//! Networking modules for the analysis API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `types` defines the wire schema, `error` the
//! failure taxonomy, and `request` the tickets/abort handles that keep
//! overlapping fetches from clobbering each other.

pub mod api;
pub mod error;
pub mod request;
pub mod types;
