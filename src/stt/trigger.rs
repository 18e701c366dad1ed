use std::sync::Arc;

use crate::engine::{Engine, ModelSource, TriggerSource};
use crate::ffi::{Handle, HandleKind, OwnedHandle};
use crate::{Error, Result};

use super::RecognizerFactory;

/// A language understanding application that intent recognizers can match against.
pub struct LanguageUnderstandingModel {
    handle: OwnedHandle,
}

impl LanguageUnderstandingModel {
    /// Refers to the application behind the given endpoint URI.
    pub fn from_endpoint<S: Into<String>>(factory: &RecognizerFactory, uri: S) -> Result<Self> {
        let uri = non_empty(uri.into(), "model endpoint")?;
        Self::create(factory.engine(), ModelSource::Endpoint(uri))
    }

    /// Refers to the application with the given identifier, using the factory's credentials.
    pub fn from_app_id<S: Into<String>>(factory: &RecognizerFactory, app_id: S) -> Result<Self> {
        let app_id = non_empty(app_id.into(), "model app id")?;
        Self::create(factory.engine(), ModelSource::AppId(app_id))
    }

    /// Refers to the application with the given identifier, reached with its own subscription.
    pub fn from_subscription<K, A, R>(
        factory: &RecognizerFactory,
        key: K,
        app_id: A,
        region: R,
    ) -> Result<Self>
    where
        K: Into<String>,
        A: Into<String>,
        R: Into<String>,
    {
        Self::create(
            factory.engine(),
            ModelSource::Subscription {
                key: non_empty(key.into(), "model subscription key")?,
                app_id: non_empty(app_id.into(), "model app id")?,
                region: non_empty(region.into(), "model region")?,
            },
        )
    }

    /// The engine handle of this model.
    pub fn handle(&self) -> Handle {
        *self.handle
    }

    fn create(engine: &Arc<dyn Engine>, source: ModelSource) -> Result<Self> {
        let handle = engine.create_language_model(&source)?;
        Ok(Self {
            handle: owned(engine, HandleKind::LanguageModel, handle)?,
        })
    }
}

/// Something an intent recognizer can fire on: a phrase, or intents of a language model.
pub struct IntentTrigger {
    handle: OwnedHandle,
}

impl IntentTrigger {
    /// Fires when the given phrase is spoken.
    pub fn from_phrase<S: AsRef<str>>(factory: &RecognizerFactory, phrase: S) -> Result<Self> {
        Self::create_phrase(factory.engine(), phrase.as_ref())
    }

    /// Fires on any intent of the model.
    pub fn from_model(
        factory: &RecognizerFactory,
        model: &LanguageUnderstandingModel,
    ) -> Result<Self> {
        Self::create(factory.engine(), &TriggerSource::Model(model.handle()))
    }

    /// Fires on the named intent of the model.
    pub fn from_model_intent<S: AsRef<str>>(
        factory: &RecognizerFactory,
        model: &LanguageUnderstandingModel,
        intent_name: S,
    ) -> Result<Self> {
        Self::create_model_intent(factory.engine(), model, intent_name.as_ref())
    }

    /// The engine handle of this trigger.
    pub fn handle(&self) -> Handle {
        *self.handle
    }

    pub(crate) fn create_phrase(engine: &Arc<dyn Engine>, phrase: &str) -> Result<Self> {
        if phrase.trim().is_empty() {
            return Err(Error::InvalidArgument("empty intent phrase".into()));
        }
        Self::create(engine, &TriggerSource::Phrase(phrase))
    }

    pub(crate) fn create_model_intent(
        engine: &Arc<dyn Engine>,
        model: &LanguageUnderstandingModel,
        intent_name: &str,
    ) -> Result<Self> {
        if intent_name.trim().is_empty() {
            return Err(Error::InvalidArgument("empty intent name".into()));
        }
        Self::create(engine, &TriggerSource::ModelIntent(model.handle(), intent_name))
    }

    fn create(engine: &Arc<dyn Engine>, source: &TriggerSource<'_>) -> Result<Self> {
        let handle = engine.create_intent_trigger(source)?;
        Ok(Self {
            handle: owned(engine, HandleKind::IntentTrigger, handle)?,
        })
    }
}

fn owned(engine: &Arc<dyn Engine>, kind: HandleKind, handle: Handle) -> Result<OwnedHandle> {
    if handle.is_valid() {
        Ok(OwnedHandle::new(engine.clone(), kind, handle))
    } else {
        Err(Error::InvalidHandle)
    }
}

fn non_empty(value: String, what: &str) -> Result<String> {
    if value.trim().is_empty() {
        Err(Error::InvalidArgument(format!("empty {}", what)))
    } else {
        Ok(value)
    }
}
