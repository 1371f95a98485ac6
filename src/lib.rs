//! Rust client for the Pricewatch price-comparison API.
//!
//! Wraps every outbound call with cookie credential propagation and a
//! 401-triggered, single-flight session refresh: when a protected request
//! fails with 401, exactly one `/auth/refresh` call is issued no matter how
//! many requests fail concurrently; the rest queue behind it and are
//! replayed (FIFO) once it settles. A failed refresh rejects every waiter
//! with the refresh's error and broadcasts [`SessionEnded`] so the
//! surrounding application can force a logout.
//!
//! ```no_run
//! use pricewatch::{PricewatchClient, ProductQuery};
//!
//! # async fn run() -> pricewatch::Result<()> {
//! let client = PricewatchClient::new()?;
//! let _session_ended = client.on_session_ended();
//!
//! let page = client.products(&ProductQuery::default()).await?;
//! for product in page.items {
//!     println!("{} {:?}", product.name, product.lowest_price);
//! }
//! # Ok(())
//! # }
//! ```

mod api;
mod client;
mod config;
mod error;
mod refresh;
mod types;

pub use client::{ApiRequest, PricewatchClient};
pub use config::{BASE_URL_ENV_VAR, ClientConfig, DEFAULT_BASE_URL, DEFAULT_EXEMPT_PATHS};
pub use error::{ApiError, RefreshError, Result};
pub use refresh::SessionEnded;
pub use types::*;
