//! Speech recognition: the recognizer factory, recognizers, intent triggers, and results.

use std::path::PathBuf;

use crate::audio::{AudioSource, StreamAdapter};
use crate::engine::EngineInput;

mod event;
mod factory;
mod parameter;
mod recognizer;
mod result;
mod trigger;

pub use event::{EventHandler, RecognitionEvent};
pub use factory::RecognizerFactory;
pub use parameter::{FactoryParameter, ParameterValue, Parameters, RecognizerParameter};
pub use recognizer::{IntentRecognizer, Recognizer, SpeechRecognizer, TranslationRecognizer};
pub use result::{Reason, RecognitionResult, ResultProperty};
pub use trigger::{IntentTrigger, LanguageUnderstandingModel};

/// Where a recognizer should get its audio from.
pub enum RecognitionInput {
    /// The default recording device.
    Default,
    /// An audio file the engine opens itself.
    File(PathBuf),
    /// A caller-implemented source, pulled through a [`StreamAdapter`].
    Stream(Box<dyn AudioSource>),
}

impl RecognitionInput {
    /// Wraps the source as stream input.
    pub fn stream<S: AudioSource + 'static>(source: S) -> Self {
        Self::Stream(Box::new(source))
    }

    fn bind(self) -> BoundInput {
        match self {
            Self::Default => BoundInput::Default,
            Self::File(path) => BoundInput::File(path),
            Self::Stream(source) => BoundInput::Stream(StreamAdapter::register(source)),
        }
    }
}

/// Recognition input with any stream already registered with the adapter.
enum BoundInput {
    Default,
    File(PathBuf),
    Stream(StreamAdapter),
}

impl BoundInput {
    fn to_engine(&self) -> EngineInput<'_> {
        match self {
            Self::Default => EngineInput::Default,
            Self::File(path) => EngineInput::File(path),
            Self::Stream(adapter) => EngineInput::Stream(adapter.stream()),
        }
    }

    fn into_stream(self) -> Option<StreamAdapter> {
        match self {
            Self::Stream(adapter) => Some(adapter),
            _ => None,
        }
    }
}

impl std::fmt::Debug for RecognitionInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => f.write_str("Default"),
            Self::File(path) => f.debug_tuple("File").field(path).finish(),
            Self::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}
