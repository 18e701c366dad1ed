use std::ops::Deref;
use std::sync::Arc;

use tokio::sync::mpsc::{channel, Receiver};

use crate::stt::{RecognitionEvent, RecognitionResult, Recognizer};
use crate::{Error, Result};

#[cfg_attr(docsrs, doc(cfg(feature = "tokio-stt")))]
/// A recognizer whose results and events can be awaited.
pub struct AsyncRecognizer<R> {
    base: Arc<R>,
    rx: Receiver<RecognitionEvent>,
}

impl<R: Deref<Target = Recognizer> + Send + Sync + 'static> AsyncRecognizer<R> {
    /// Wraps the recognizer, configured to buffer up to the given number of events. If an event is
    /// raised while the buffer is full, it will be silently dropped.
    ///
    /// This replaces any event handler previously set on the recognizer. A zero `buffer` is
    /// rejected with [`Error::InvalidArgument`].
    pub fn new(recognizer: R, buffer: usize) -> Result<Self> {
        if buffer == 0 {
            return Err(Error::InvalidArgument("event buffer must not be empty".into()));
        }
        let (tx, rx) = channel::<RecognitionEvent>(buffer);
        recognizer.set_event_handler(move |event: RecognitionEvent| {
            let _ = tx.try_send(event);
        })?;
        Ok(Self {
            base: Arc::new(recognizer),
            rx,
        })
    }

    /// Completes when a single utterance has been recognized. The engine call runs on Tokio's
    /// blocking thread pool.
    pub async fn recognize(&self) -> Result<RecognitionResult> {
        let base = self.base.clone();
        tokio::task::spawn_blocking(move || base.recognize())
            .await
            .map_err(|_| Error::Cancelled)?
    }

    /// Completes with the next event the recognizer raises, or `None` once the recognizer can no
    /// longer raise events.
    pub async fn next_event(&mut self) -> Option<RecognitionEvent> {
        self.rx.recv().await
    }
}

impl<R> Deref for AsyncRecognizer<R> {
    type Target = R;
    fn deref(&self) -> &Self::Target {
        &self.base
    }
}
