//! Typed endpoint wrappers over the request coordinator.
//!
//! Each module contributes one `impl PricewatchClient` block for a group of
//! endpoints. These are thin callers: every method builds an
//! [`ApiRequest`](crate::ApiRequest) and hands it to `send`, inheriting the
//! refresh-and-replay behavior transparently.

mod alerts;
mod auth;
mod products;
mod settings;
mod wishlist;
