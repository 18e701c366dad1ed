//! Support for async operations running on Tokio.

#[cfg(feature = "tokio-stt")]
mod stt;

#[cfg(feature = "tokio-stt")]
pub use stt::AsyncRecognizer;
