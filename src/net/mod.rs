//! Network layer: auth endpoints and their wire types.

pub mod api;
pub mod types;
