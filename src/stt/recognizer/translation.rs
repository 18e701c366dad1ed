use std::ops::Deref;

use super::Recognizer;

/// Transcribes speech and translates it into one or more target languages.
///
/// Results carry one entry per target language in
/// [`RecognitionResult::translations`](crate::stt::RecognitionResult::translations).
pub struct TranslationRecognizer {
    base: Recognizer,
    source_language: String,
    target_languages: Vec<String>,
}

impl TranslationRecognizer {
    pub(crate) fn new(
        base: Recognizer,
        source_language: String,
        target_languages: Vec<String>,
    ) -> Self {
        Self {
            base,
            source_language,
            target_languages,
        }
    }

    /// The language spoken in the audio.
    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    /// The languages the speech is translated into.
    pub fn target_languages(&self) -> &[String] {
        &self.target_languages
    }
}

impl Deref for TranslationRecognizer {
    type Target = Recognizer;
    fn deref(&self) -> &Self::Target {
        &self.base
    }
}
