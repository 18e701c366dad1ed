use std::sync::Arc;

use tracing::debug;

use crate::config::FactoryConfig;
use crate::engine::{Engine, RecognizerKind, RecognizerRequest};
use crate::ffi::{HandleKind, OwnedHandle};
use crate::{Error, Result};

use super::{
    FactoryParameter, IntentRecognizer, Parameters, RecognitionInput, Recognizer,
    SpeechRecognizer, TranslationRecognizer,
};

/// Creates recognizers that share the same engine and connection parameters.
///
/// Create one factory when the application starts and pass it by reference to wherever
/// recognizers are needed. Changing a parameter affects only the recognizers created afterwards.
pub struct RecognizerFactory {
    engine: Arc<dyn Engine>,
    parameters: Parameters,
    language: Option<String>,
}

impl RecognizerFactory {
    /// Creates a factory backed by the given engine, with no parameters set.
    pub fn new<E: Engine + 'static>(engine: E) -> Self {
        Self::with_engine(Arc::new(engine))
    }

    /// Creates a factory backed by a shared engine, with no parameters set.
    pub fn with_engine(engine: Arc<dyn Engine>) -> Self {
        Self {
            engine,
            parameters: Parameters::new(),
            language: None,
        }
    }

    /// Creates a factory and applies the given configuration to it.
    pub fn from_config(engine: Arc<dyn Engine>, config: &FactoryConfig) -> Self {
        let mut factory = Self::with_engine(engine);
        config.apply(&mut factory);
        factory
    }

    /// The parameters passed to every recognizer this factory creates.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Mutable access to the factory parameters.
    pub fn parameters_mut(&mut self) -> &mut Parameters {
        &mut self.parameters
    }

    /// Sets the region of the service the recognizers will connect to.
    pub fn set_region<S: Into<String>>(&mut self, value: S) {
        self.parameters.set_string(FactoryParameter::Region, value)
    }

    /// Sets the subscription key the recognizers will use when connecting to the service.
    pub fn set_subscription_key<S: Into<String>>(&mut self, value: S) {
        self.parameters.set_string(FactoryParameter::SubscriptionKey, value)
    }

    /// Sets the authorization token the recognizers will use when connecting to the service.
    ///
    /// The caller is responsible for replacing the token before it expires.
    pub fn set_authorization_token<S: Into<String>>(&mut self, value: S) {
        self.parameters.set_string(FactoryParameter::AuthorizationToken, value)
    }

    /// Sets the endpoint URL of the service.
    pub fn set_endpoint_url<S: Into<String>>(&mut self, value: S) {
        self.parameters.set_string(FactoryParameter::Endpoint, value)
    }

    /// The spoken language used when a recognizer is created without one.
    pub fn default_language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Sets the spoken language, in BCP-47 format, used when a recognizer is created without one.
    /// `None` leaves the choice to the engine.
    pub fn set_default_language(&mut self, language: Option<&str>) {
        self.language = language.map(str::to_string);
    }

    /// Creates a speech recognizer that reads from the given input.
    pub fn create_speech_recognizer(&self, input: RecognitionInput) -> Result<SpeechRecognizer> {
        self.create(RecognizerKind::Speech, None, input).map(SpeechRecognizer::new)
    }

    /// Creates a speech recognizer for the given spoken language.
    pub fn create_speech_recognizer_with_language<S: AsRef<str>>(
        &self,
        input: RecognitionInput,
        language: S,
    ) -> Result<SpeechRecognizer> {
        self.create(RecognizerKind::Speech, Some(language.as_ref()), input)
            .map(SpeechRecognizer::new)
    }

    /// Creates an intent recognizer that reads from the given input.
    pub fn create_intent_recognizer(&self, input: RecognitionInput) -> Result<IntentRecognizer> {
        self.create(RecognizerKind::Intent, None, input).map(IntentRecognizer::new)
    }

    /// Creates an intent recognizer for the given spoken language.
    pub fn create_intent_recognizer_with_language<S: AsRef<str>>(
        &self,
        input: RecognitionInput,
        language: S,
    ) -> Result<IntentRecognizer> {
        self.create(RecognizerKind::Intent, Some(language.as_ref()), input)
            .map(IntentRecognizer::new)
    }

    /// Creates a recognizer that translates speech in `source_language` into every one of the
    /// target languages. All languages are in BCP-47 format.
    pub fn create_translation_recognizer<S, I, T>(
        &self,
        input: RecognitionInput,
        source_language: S,
        target_languages: I,
    ) -> Result<TranslationRecognizer>
    where
        S: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let source_language: String = source_language.into();
        let target_languages: Vec<String> = target_languages.into_iter().map(Into::into).collect();
        if target_languages.is_empty() {
            return Err(Error::InvalidArgument("no target language for translation".into()));
        }
        let kind = RecognizerKind::Translation {
            source_language: source_language.clone(),
            target_languages: target_languages.clone(),
        };
        self.create(kind, Some(&source_language), input)
            .map(|base| TranslationRecognizer::new(base, source_language, target_languages))
    }

    pub(crate) fn engine(&self) -> &Arc<dyn Engine> {
        &self.engine
    }

    fn create(
        &self,
        kind: RecognizerKind,
        language: Option<&str>,
        input: RecognitionInput,
    ) -> Result<Recognizer> {
        let language = language.or(self.language.as_deref());
        let input = input.bind();
        let handle = self.engine.create_recognizer(&RecognizerRequest {
            kind: &kind,
            language,
            input: input.to_engine(),
            parameters: &self.parameters,
        })?;
        if !handle.is_valid() {
            return Err(Error::InvalidHandle);
        }
        debug!(%handle, ?kind, ?language, "created recognizer");
        Ok(Recognizer::new(
            OwnedHandle::new(self.engine.clone(), HandleKind::Recognizer, handle),
            kind,
            input.into_stream(),
        ))
    }
}
