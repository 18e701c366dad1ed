use super::RecognitionResult;

/// Something that happened during recognition.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum RecognitionEvent {
    /// The engine opened a recognition session.
    SessionStarted,
    /// The engine closed the recognition session.
    SessionStopped,
    /// A partial hypothesis for the utterance in progress.
    Intermediate(RecognitionResult),
    /// The final result of an utterance.
    Final(RecognitionResult),
}

/// The handler a recognizer will call with its events.
///
/// The engine calls the handler on its own threads, so it must be `Send` and `Sync`.
pub trait EventHandler: Send + Sync {
    /// Called for every event the recognizer raises.
    fn on_event(&self, event: RecognitionEvent);
}

impl<F: Fn(RecognitionEvent) + Send + Sync> EventHandler for F {
    fn on_event(&self, event: RecognitionEvent) {
        self(event)
    }
}
