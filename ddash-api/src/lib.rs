pub mod client;
pub mod error;
pub mod flights;
pub mod houses;
pub mod loader;
pub mod weather;

pub use client::{ApiClient, RetryPolicy, DEFAULT_BASE_URL};
pub use error::{Result, TransportError};
pub use loader::{DatasetCache, Session};
