#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! A simplified binding to a handle-based native speech recognition engine.
//!
//! # Features
//!
//! The engine itself (speech decoding, the protocol to the cloud service, language understanding)
//! lives behind an opaque native library. This crate wraps the handles that library hands out in
//! types that close them when dropped, converts its failures into [`Error`], and lets Rust code feed
//! audio to it.
//!
//! ## Speech recognition
//!
//! The [stt] module provides the API to recognize speech, match it against intents, or translate
//! it.
//!
//! The first thing you need is a [`RecognizerFactory`](stt::RecognizerFactory). Create one when
//! your application starts, configure the region and credentials on it (directly, or from a
//! [`FactoryConfig`](config::FactoryConfig)), and pass it by reference to the code that needs
//! recognizers. Each recognizer can listen to the default recording device, read an audio file, or
//! pull audio from a source you implement.
//!
//! ## Audio sources
//!
//! The [audio] module defines the [`AudioSource`](audio::AudioSource) trait and the
//! [`StreamAdapter`](audio::StreamAdapter) that presents a source to the engine through the fixed
//! table of C entry points the engine calls. Sources can be anything: a file, a memory buffer, a
//! network stream, or a capture device.
//!
//! # The engine seam
//!
//! All calls into the native library go through the [`Engine`](engine::Engine) trait. The
//! recognizers, models, and triggers in this crate are thin wrappers around it, so whatever
//! implements it decides what "recognizing" means.

pub mod audio;
pub mod config;
pub mod engine;
mod error;
pub mod ffi;
pub mod stt;

#[cfg(feature = "tokio")]
pub mod tokio;

pub use error::Error;

/// The type returned by the functions and methods of this crate.
pub type Result<T> = std::result::Result<T, Error>;
