use std::collections::BTreeMap;

use strum_macros::{AsRefStr, Display};

/// Why a recognition result was produced.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Display)]
pub enum Reason {
    /// The engine recognized a complete utterance.
    Recognized,
    /// A partial hypothesis for an utterance still in progress.
    IntermediateResult,
    /// Speech was detected but nothing could be recognized.
    NoMatch,
    /// Recognition was cancelled, typically because of an error. The text carries the details.
    Canceled,
}

/// Well-known keys of [`RecognitionResult::properties`].
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, AsRefStr)]
pub enum ResultProperty {
    /// The raw JSON returned by the language understanding service.
    LanguageUnderstandingJson,
    /// The raw JSON returned by the speech service.
    Json,
}

/// The outcome of recognizing a single utterance.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct RecognitionResult {
    /// Why the result was produced.
    pub reason: Reason,
    /// Recognized text, or an error description for cancelled results.
    pub text: String,
    /// Identifier of the matched intent, for intent recognizers.
    pub intent_id: Option<String>,
    /// Translated text keyed by target language, for translation recognizers.
    pub translations: BTreeMap<String, String>,
    /// Additional engine-specific properties.
    pub properties: BTreeMap<String, String>,
}

impl RecognitionResult {
    /// Creates a result with the given reason and text and nothing else.
    pub fn new<S: Into<String>>(reason: Reason, text: S) -> Self {
        Self {
            reason,
            text: text.into(),
            intent_id: None,
            translations: BTreeMap::new(),
            properties: BTreeMap::new(),
        }
    }

    /// Returns the named property.
    pub fn property<N: AsRef<str>>(&self, name: N) -> Option<&str> {
        self.properties.get(name.as_ref()).map(String::as_str)
    }

    /// Returns the language understanding JSON, if the engine attached it.
    pub fn language_understanding_json(&self) -> Option<&str> {
        self.property(ResultProperty::LanguageUnderstandingJson)
    }
}
