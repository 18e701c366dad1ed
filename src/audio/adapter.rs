use std::collections::BTreeMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr::{self, NonNull};
use std::slice;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, error, trace, warn};

use crate::ffi::{RawAudioFormat, RawAudioStream, RawStreamRef};
use crate::Result;

use super::AudioSource;

/// Process-wide table of live stream contexts, keyed by the address of their call table.
static STREAMS: StreamRegistry = StreamRegistry::new();

const CALL_TABLE: RawAudioStream = RawAudioStream {
    get_format: adapter_get_format,
    read: adapter_read,
    close: adapter_close,
};

/// Presents an [`AudioSource`] to the engine as a native stream context.
///
/// Registering a source allocates a call table whose address the engine uses as the context
/// pointer. The context stays valid until the adapter is dropped or [revoked](Self::revoke), at
/// which point the engine must no longer call into it. Closing the stream from the engine side
/// does not revoke the context, so a repeated close is harmless.
///
/// The entry points never unwind into the engine. Failures reported by the source, panics, and
/// calls on a revoked context all collapse into the engine's failure sentinel: 0 bytes for format
/// queries and reads, nothing for close. A failed read is therefore indistinguishable from the end
/// of the stream.
///
/// A format request hands the engine's buffer capacity to the source, and the byte count the
/// source reports is clamped to that capacity and to [`RawAudioFormat::SIZE`].
#[derive(Debug)]
pub struct StreamAdapter {
    key: usize,
}

impl StreamAdapter {
    /// Registers the source and returns the adapter that owns the registration.
    pub fn register<S: AudioSource + 'static>(source: S) -> Self {
        let key = STREAMS.insert(StreamContext::new(Box::new(source)));
        debug!(context = key, "registered audio stream");
        Self {
            key,
        }
    }

    /// The engine-side reference to hand over to the engine.
    pub fn stream(&self) -> RawStreamRef {
        // The key was produced from a non-null table pointer in `StreamContext::new`.
        RawStreamRef::new(unsafe { NonNull::new_unchecked(self.key as *mut RawAudioStream) })
    }

    /// Returns `true` while the engine may still call into this stream.
    pub fn is_registered(&self) -> bool {
        STREAMS.lookup(self.key).is_some()
    }

    /// Revokes the registration, dropping the source. Same as dropping the adapter.
    pub fn revoke(self) {}
}

impl Drop for StreamAdapter {
    fn drop(&mut self) {
        if STREAMS.remove(self.key) {
            debug!(context = self.key, "revoked audio stream");
        }
    }
}

struct StreamContext {
    table: NonNull<RawAudioStream>,
    source: Mutex<Box<dyn AudioSource>>,
}

// The table is never written after construction; the source is `Send` and guarded by the mutex.
unsafe impl Send for StreamContext {}
unsafe impl Sync for StreamContext {}

impl StreamContext {
    fn new(source: Box<dyn AudioSource>) -> Self {
        Self {
            table: NonNull::from(Box::leak(Box::new(CALL_TABLE))),
            source: Mutex::new(source),
        }
    }

    fn key(&self) -> usize {
        self.table.as_ptr() as usize
    }

    fn source(&self) -> MutexGuard<'_, Box<dyn AudioSource>> {
        self.source.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for StreamContext {
    fn drop(&mut self) {
        drop(unsafe { Box::from_raw(self.table.as_ptr()) });
    }
}

struct StreamRegistry {
    entries: Mutex<BTreeMap<usize, Arc<StreamContext>>>,
}

impl StreamRegistry {
    const fn new() -> Self {
        Self {
            entries: Mutex::new(BTreeMap::new()),
        }
    }

    fn insert(&self, context: StreamContext) -> usize {
        let key = context.key();
        self.entries().insert(key, Arc::new(context));
        key
    }

    fn lookup(&self, key: usize) -> Option<Arc<StreamContext>> {
        self.entries().get(&key).cloned()
    }

    fn remove(&self, key: usize) -> bool {
        // Release the lock before the context (and the source inside it) is dropped.
        let removed = self.entries().remove(&key);
        removed.is_some()
    }

    fn entries(&self) -> MutexGuard<'_, BTreeMap<usize, Arc<StreamContext>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn forward<T, F>(context: *mut RawAudioStream, op: &'static str, sentinel: T, f: F) -> T
where
    F: FnOnce(&mut dyn AudioSource) -> Result<T>,
{
    let key = context as usize;
    let ctx = match STREAMS.lookup(key) {
        Some(ctx) => ctx,
        None => {
            warn!(context = key, op, "call on unknown audio stream");
            return sentinel;
        }
    };
    let result = catch_unwind(AssertUnwindSafe(|| {
        let mut source = ctx.source();
        f(&mut **source)
    }));
    match result {
        Ok(Ok(value)) => value,
        Ok(Err(err)) => {
            warn!(context = key, op, %err, "audio source failed");
            sentinel
        }
        Err(_) => {
            error!(context = key, op, "audio source panicked");
            sentinel
        }
    }
}

unsafe extern "C" fn adapter_get_format(
    context: *mut RawAudioStream,
    format: *mut RawAudioFormat,
    capacity: u16,
) -> u16 {
    forward(context, "get_format", 0, |source| {
        if format.is_null() {
            return source.format_size();
        }
        let (descriptor, reported) = source.format(capacity)?;
        let written = reported.min(capacity).min(RawAudioFormat::SIZE);
        if written < reported {
            warn!(reported, capacity, "audio source overreported format size");
        }
        if written == 0 {
            warn!(capacity, required = RawAudioFormat::SIZE, "format not written");
            return Ok(0);
        }
        let raw = descriptor.to_raw();
        unsafe {
            ptr::copy_nonoverlapping(
                (&raw as *const RawAudioFormat).cast::<u8>(),
                format.cast::<u8>(),
                written as usize,
            )
        };
        Ok(written)
    })
}

unsafe extern "C" fn adapter_read(
    context: *mut RawAudioStream,
    buffer: *mut u8,
    capacity: u32,
) -> u32 {
    if buffer.is_null() {
        warn!(context = context as usize, "read into null buffer");
        return 0;
    }
    forward(context, "read", 0, |source| {
        let buffer = unsafe { slice::from_raw_parts_mut(buffer, capacity as usize) };
        let mut count = source.read(buffer)?;
        if count > buffer.len() {
            warn!(count, capacity, "audio source overreported read");
            count = buffer.len();
        }
        trace!(count, capacity, "read audio");
        Ok(count as u32)
    })
}

unsafe extern "C" fn adapter_close(context: *mut RawAudioStream) {
    forward(context, "close", (), |source| {
        source.close();
        Ok(())
    })
}
