//! The seam between this crate and the native recognition engine.
//!
//! Everything this crate does beyond adapting audio streams is a thin call into an [`Engine`].
//! An implementation typically forwards each method to the corresponding function of the native
//! library, translating its result codes into [`Error::Engine`](crate::Error::Engine).

use std::path::Path;
use std::sync::Arc;

use crate::ffi::{Handle, HandleKind, RawStreamRef};
use crate::stt::{EventHandler, ParameterValue, Parameters, RecognitionResult};
use crate::Result;

/// The kind of recognizer to create, along with any kind-specific settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognizerKind {
    /// Transcribes speech to text.
    Speech,
    /// Transcribes speech and matches it against the registered intents.
    Intent,
    /// Transcribes speech and translates it into each of the target languages.
    Translation {
        /// Language spoken in the audio, in BCP-47 format.
        source_language: String,
        /// Languages to translate into, in BCP-47 format. Never empty.
        target_languages: Vec<String>,
    },
}

/// Where a recognizer gets its audio from, as seen by the engine.
#[derive(Debug, Clone, Copy)]
pub enum EngineInput<'a> {
    /// The default recording device.
    Default,
    /// An audio file.
    File(&'a Path),
    /// A registered caller stream.
    Stream(RawStreamRef),
}

/// Everything the engine needs to create a recognizer.
#[derive(Debug, Clone, Copy)]
pub struct RecognizerRequest<'a> {
    /// What kind of recognizer to create.
    pub kind: &'a RecognizerKind,
    /// Spoken language in BCP-47 format, if not the engine's default.
    pub language: Option<&'a str>,
    /// Audio input.
    pub input: EngineInput<'a>,
    /// Factory-level parameters (region, credentials, endpoint, and so on).
    pub parameters: &'a Parameters,
}

/// Identifies a language understanding application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// A fully qualified endpoint URI.
    Endpoint(String),
    /// An application identifier, using the factory's credentials.
    AppId(String),
    /// An application reached with its own subscription.
    Subscription {
        /// Subscription key of the language understanding service.
        key: String,
        /// Application identifier.
        app_id: String,
        /// Region of the language understanding service.
        region: String,
    },
}

/// What an intent trigger fires on.
#[derive(Debug, Clone, Copy)]
pub enum TriggerSource<'a> {
    /// A literal phrase.
    Phrase(&'a str),
    /// Any intent of the given model.
    Model(Handle),
    /// A single named intent of the given model.
    ModelIntent(Handle, &'a str),
}

/// The native recognition engine.
///
/// All methods are called synchronously. Handles returned by the `create_*` methods are closed
/// with [`close_handle`](Self::close_handle) exactly once, when the owning wrapper is dropped.
pub trait Engine: Send + Sync {
    /// Creates a recognizer. For stream input, the engine may call into the stream from any
    /// thread until the handle is closed.
    fn create_recognizer(&self, request: &RecognizerRequest<'_>) -> Result<Handle>;

    /// Recognizes a single utterance and returns its result.
    fn recognize_once(&self, recognizer: Handle) -> Result<RecognitionResult>;

    /// Starts recognizing continuously. Results are delivered to the connected event handler.
    fn start_continuous_recognition(&self, recognizer: Handle) -> Result<()>;

    /// Stops continuous recognition.
    fn stop_continuous_recognition(&self, recognizer: Handle) -> Result<()>;

    /// Starts listening for the keyword; recognition begins once it is heard.
    fn start_keyword_recognition(&self, recognizer: Handle, keyword: &str) -> Result<()>;

    /// Stops keyword recognition.
    fn stop_keyword_recognition(&self, recognizer: Handle) -> Result<()>;

    /// Sets a recognizer-level parameter.
    fn set_recognizer_parameter(
        &self,
        recognizer: Handle,
        name: &str,
        value: &ParameterValue,
    ) -> Result<()>;

    /// Routes the recognizer's events to the handler, replacing any previous handler.
    fn connect_events(&self, recognizer: Handle, handler: Arc<dyn EventHandler>) -> Result<()>;

    /// Creates a language understanding model.
    fn create_language_model(&self, source: &ModelSource) -> Result<Handle>;

    /// Creates an intent trigger.
    fn create_intent_trigger(&self, source: &TriggerSource<'_>) -> Result<Handle>;

    /// Registers a trigger with an intent recognizer under the given intent identifier.
    fn add_intent(&self, recognizer: Handle, intent_id: &str, trigger: Handle) -> Result<()>;

    /// Releases the resource named by the handle.
    fn close_handle(&self, kind: HandleKind, handle: Handle);
}
