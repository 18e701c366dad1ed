use std::ops::Deref;

use crate::stt::RecognizerParameter;
use crate::Result;

use super::Recognizer;

/// Transcribes speech to text.
pub struct SpeechRecognizer {
    base: Recognizer,
}

impl SpeechRecognizer {
    pub(crate) fn new(base: Recognizer) -> Self {
        Self {
            base,
        }
    }

    /// Uses the custom speech model with the given deployment identifier.
    pub fn set_deployment_id<S: AsRef<str>>(&self, deployment_id: S) -> Result<()> {
        self.base.set_parameter(RecognizerParameter::DeploymentId, deployment_id.as_ref())
    }
}

impl Deref for SpeechRecognizer {
    type Target = Recognizer;
    fn deref(&self) -> &Self::Target {
        &self.base
    }
}
