//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Domain types handed to the view layer
//! - `wire.rs`: Raw serde structs matching API responses
//! - `convert.rs`: `From` conversions (the wire-to-domain mapper)
//! - `client.rs`: Sub-client with HTTP methods

pub mod coin;
