use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::engine::Engine;

/// An opaque identifier naming a resource owned by the engine.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct Handle(pub usize);

impl Handle {
    /// The value the engine uses for "no resource".
    pub const INVALID: Handle = Handle(usize::MAX);

    /// Returns `true` unless this is [`Handle::INVALID`].
    pub fn is_valid(&self) -> bool {
        *self != Self::INVALID
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// What kind of resource a handle names. The engine closes each kind through a different call.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
#[allow(missing_docs)]
pub enum HandleKind {
    Recognizer,
    LanguageModel,
    IntentTrigger,
}

/// Closes the engine resource when dropped.
pub(crate) struct OwnedHandle {
    engine: Arc<dyn Engine>,
    kind: HandleKind,
    handle: Handle,
}

impl OwnedHandle {
    pub fn new(engine: Arc<dyn Engine>, kind: HandleKind, handle: Handle) -> Self {
        Self {
            engine,
            kind,
            handle,
        }
    }

    pub fn engine(&self) -> &Arc<dyn Engine> {
        &self.engine
    }
}

impl Deref for OwnedHandle {
    type Target = Handle;
    fn deref(&self) -> &Self::Target {
        &self.handle
    }
}

impl Drop for OwnedHandle {
    fn drop(&mut self) {
        if self.handle.is_valid() {
            tracing::debug!(kind = ?self.kind, handle = %self.handle, "closing handle");
            self.engine.close_handle(self.kind, self.handle);
        }
    }
}
