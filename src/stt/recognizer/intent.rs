use std::ops::Deref;

use crate::stt::{IntentTrigger, LanguageUnderstandingModel};
use crate::Result;

use super::Recognizer;

/// Transcribes speech and matches it against a set of intents.
///
/// Each intent is registered under an identifier of the caller's choosing; that identifier is
/// reported in [`RecognitionResult::intent_id`](crate::stt::RecognitionResult::intent_id) when
/// the intent matches.
pub struct IntentRecognizer {
    base: Recognizer,
}

impl IntentRecognizer {
    pub(crate) fn new(base: Recognizer) -> Self {
        Self {
            base,
        }
    }

    /// Registers the trigger under the given intent identifier.
    pub fn add_intent<S: AsRef<str>>(&self, intent_id: S, trigger: &IntentTrigger) -> Result<()> {
        let handle = self.base.owned_handle();
        handle.engine().add_intent(**handle, intent_id.as_ref(), trigger.handle())
    }

    /// Registers a simple phrase, using the phrase itself as the intent identifier.
    pub fn add_phrase<S: AsRef<str>>(&self, phrase: S) -> Result<()> {
        let phrase = phrase.as_ref();
        let trigger = IntentTrigger::create_phrase(self.base.owned_handle().engine(), phrase)?;
        self.add_intent(phrase, &trigger)
    }

    /// Registers a single intent of the model under the given intent identifier.
    pub fn add_model_intent<I: AsRef<str>, N: AsRef<str>>(
        &self,
        intent_id: I,
        model: &LanguageUnderstandingModel,
        intent_name: N,
    ) -> Result<()> {
        let trigger = IntentTrigger::create_model_intent(
            self.base.owned_handle().engine(),
            model,
            intent_name.as_ref(),
        )?;
        self.add_intent(intent_id, &trigger)
    }
}

impl Deref for IntentRecognizer {
    type Target = Recognizer;
    fn deref(&self) -> &Self::Target {
        &self.base
    }
}
