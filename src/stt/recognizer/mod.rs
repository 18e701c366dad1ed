use std::sync::Arc;

use tracing::debug;

use crate::audio::StreamAdapter;
use crate::engine::RecognizerKind;
use crate::ffi::{Handle, OwnedHandle};
use crate::{Error, Result};

use super::{EventHandler, ParameterValue, RecognitionResult};

mod intent;
mod speech;
mod translation;

pub use intent::IntentRecognizer;
pub use speech::SpeechRecognizer;
pub use translation::TranslationRecognizer;

/// Provides the recognition API shared across the different kinds of recognizers.
pub struct Recognizer {
    // Must be dropped before the stream, so the engine stops reading before the stream is revoked.
    handle: OwnedHandle,
    stream: Option<StreamAdapter>,
    kind: RecognizerKind,
}

impl Recognizer {
    pub(crate) fn new(
        handle: OwnedHandle,
        kind: RecognizerKind,
        stream: Option<StreamAdapter>,
    ) -> Self {
        Self {
            handle,
            stream,
            kind,
        }
    }

    /// The engine handle of this recognizer.
    pub fn handle(&self) -> Handle {
        *self.handle
    }

    /// What kind of recognizer this is.
    pub fn kind(&self) -> &RecognizerKind {
        &self.kind
    }

    /// Returns `true` if the recognizer reads from a caller-supplied stream.
    pub fn has_stream_input(&self) -> bool {
        self.stream.is_some()
    }

    /// Blocks until a single utterance has been recognized and returns the result.
    pub fn recognize(&self) -> Result<RecognitionResult> {
        let handle = *self.handle;
        let result = self.handle.engine().recognize_once(handle)?;
        debug!(%handle, reason = %result.reason, "recognized utterance");
        Ok(result)
    }

    /// Starts recognizing continuously. Results are delivered to the event handler.
    pub fn start_continuous_recognition(&self) -> Result<()> {
        self.handle.engine().start_continuous_recognition(*self.handle)
    }

    /// Stops continuous recognition.
    pub fn stop_continuous_recognition(&self) -> Result<()> {
        self.handle.engine().stop_continuous_recognition(*self.handle)
    }

    /// Starts listening for the keyword. Recognition begins once it has been heard.
    pub fn start_keyword_recognition<S: AsRef<str>>(&self, keyword: S) -> Result<()> {
        let keyword = keyword.as_ref();
        if keyword.trim().is_empty() {
            return Err(Error::InvalidArgument("empty keyword".into()));
        }
        self.handle.engine().start_keyword_recognition(*self.handle, keyword)
    }

    /// Stops keyword recognition.
    pub fn stop_keyword_recognition(&self) -> Result<()> {
        self.handle.engine().stop_keyword_recognition(*self.handle)
    }

    /// Sets a recognizer-level parameter.
    pub fn set_parameter<N, V>(&self, name: N, value: V) -> Result<()>
    where
        N: AsRef<str>,
        V: Into<ParameterValue>,
    {
        self.handle
            .engine()
            .set_recognizer_parameter(*self.handle, name.as_ref(), &value.into())
    }

    /// Routes the recognizer's events to the handler, replacing any previous one.
    pub fn set_event_handler<E: EventHandler + 'static>(&self, handler: E) -> Result<()> {
        self.handle.engine().connect_events(*self.handle, Arc::new(handler))
    }

    pub(crate) fn owned_handle(&self) -> &OwnedHandle {
        &self.handle
    }
}
