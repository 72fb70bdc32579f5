//! Utilities shared by every backend: connection retry with backoff

pub mod retry;

pub use retry::{RetryConfig, retry, retry_with_backoff};
