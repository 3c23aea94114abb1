//! Network boundary: wire types and the authentication service client.

pub mod api;
pub mod types;
