//! The C-level types shared with the native engine.
//!
//! These definitions mirror the engine's headers byte for byte. Nothing in here is safe to change
//! without a matching change on the native side.

use std::ptr::{null_mut, NonNull};

mod handle;

pub use handle::{Handle, HandleKind};
pub(crate) use handle::OwnedHandle;

/// The engine's view of an audio format. Same field order as `WAVEFORMATEX`.
#[repr(C)]
#[allow(missing_docs)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RawAudioFormat {
    pub format_tag: u16,
    pub channels: u16,
    pub samples_per_sec: u32,
    pub avg_bytes_per_sec: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    pub extra_size: u16,
}

impl RawAudioFormat {
    /// Number of bytes the adapter writes into a format buffer.
    pub const SIZE: u16 = std::mem::size_of::<RawAudioFormat>() as u16;
}

/// Reports the stream format. Called with a null buffer to query the required size.
pub type GetFormatFn = unsafe extern "C" fn(
    context: *mut RawAudioStream,
    format: *mut RawAudioFormat,
    capacity: u16,
) -> u16;

/// Fills the buffer with audio data and returns the number of bytes written. Zero ends the stream.
pub type ReadFn =
    unsafe extern "C" fn(context: *mut RawAudioStream, buffer: *mut u8, capacity: u32) -> u32;

/// Tells the stream the engine is done with it.
pub type CloseFn = unsafe extern "C" fn(context: *mut RawAudioStream);

/// The call table the engine expects at the start of every stream context it is handed.
#[repr(C)]
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy)]
pub struct RawAudioStream {
    pub get_format: GetFormatFn,
    pub read: ReadFn,
    pub close: CloseFn,
}

/// An engine-side reference to a registered stream context.
///
/// [`Engine`](crate::engine::Engine) implementations receive one of these for stream input and
/// use it to pull audio exactly the way the native engine would.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawStreamRef(NonNull<RawAudioStream>);

// The pointee is an immutable call table; all mutable state sits behind the registry's locks.
unsafe impl Send for RawStreamRef {}
unsafe impl Sync for RawStreamRef {}

impl RawStreamRef {
    pub(crate) fn new(ptr: NonNull<RawAudioStream>) -> Self {
        Self(ptr)
    }

    /// The pointer the native engine would receive.
    pub fn as_ptr(&self) -> *mut RawAudioStream {
        self.0.as_ptr()
    }

    /// Queries the size of the format buffer the stream needs.
    ///
    /// # Safety
    ///
    /// The stream context must not have been revoked.
    pub unsafe fn format_size(&self) -> u16 {
        (self.table().get_format)(self.as_ptr(), null_mut(), 0)
    }

    /// Fetches the stream format into `format`, returning the number of bytes written.
    ///
    /// # Safety
    ///
    /// The stream context must not have been revoked.
    pub unsafe fn get_format(&self, format: &mut RawAudioFormat) -> u16 {
        (self.table().get_format)(self.as_ptr(), format, RawAudioFormat::SIZE)
    }

    /// Reads audio into `buffer`, returning the number of bytes read.
    ///
    /// # Safety
    ///
    /// The stream context must not have been revoked.
    pub unsafe fn read(&self, buffer: &mut [u8]) -> u32 {
        let capacity = u32::try_from(buffer.len()).unwrap_or(u32::MAX);
        (self.table().read)(self.as_ptr(), buffer.as_mut_ptr(), capacity)
    }

    /// Closes the stream.
    ///
    /// # Safety
    ///
    /// The stream context must not have been revoked.
    pub unsafe fn close(&self) {
        (self.table().close)(self.as_ptr())
    }

    unsafe fn table(&self) -> &RawAudioStream {
        self.0.as_ref()
    }
}
