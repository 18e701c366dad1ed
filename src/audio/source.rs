use std::fs::File;
use std::io::{Cursor, ErrorKind, Read};
use std::path::Path;

use crate::Result;

use super::{AudioFormat, AudioFormatDescriptor};

/// A caller-supplied source of audio that the engine pulls from.
///
/// The engine calls these methods synchronously, one at a time, on a thread of its choosing. After
/// `read` returns 0 the engine treats the stream as finished. `close` may be called more than once
/// and must tolerate that.
pub trait AudioSource: Send {
    /// Reports the format of the audio this source produces, along with how many bytes of it the
    /// engine should take. `capacity` is the size of the buffer the engine offered.
    ///
    /// Sources without extension data can return [`AudioFormatDescriptor::fit`].
    fn format(&mut self, capacity: u16) -> Result<(AudioFormatDescriptor, u16)>;

    /// Reports how many bytes the engine must reserve for the format. Most sources never need to
    /// override this.
    fn format_size(&mut self) -> Result<u16> {
        Ok(AudioFormatDescriptor::SIZE)
    }

    /// Fills `buffer` with audio and returns the number of bytes written. Returning 0 ends the
    /// stream.
    ///
    /// An error also reaches the engine as 0 bytes read, so it cannot tell a failed source from
    /// one that has run dry.
    fn read(&mut self, buffer: &mut [u8]) -> Result<usize>;

    /// Releases whatever the source holds. Must be idempotent.
    fn close(&mut self);
}

impl<S: AudioSource + ?Sized> AudioSource for Box<S> {
    fn format(&mut self, capacity: u16) -> Result<(AudioFormatDescriptor, u16)> {
        (**self).format(capacity)
    }

    fn format_size(&mut self) -> Result<u16> {
        (**self).format_size()
    }

    fn read(&mut self, buffer: &mut [u8]) -> Result<usize> {
        (**self).read(buffer)
    }

    fn close(&mut self) {
        (**self).close()
    }
}

/// An [`AudioSource`] that pulls raw audio out of any [`Read`] implementation.
pub struct ReadSource<R> {
    reader: Option<R>,
    format: AudioFormatDescriptor,
}

impl<R: Read + Send> ReadSource<R> {
    /// Wraps the reader, reporting the given format to the engine.
    pub fn new<F: Into<AudioFormatDescriptor>>(reader: R, format: F) -> Self {
        Self {
            reader: Some(reader),
            format: format.into(),
        }
    }

    /// Returns `true` once the source has been closed.
    pub fn is_closed(&self) -> bool {
        self.reader.is_none()
    }
}

impl ReadSource<File> {
    /// Opens a file containing raw audio in the given format.
    pub fn open_file<P: AsRef<Path>>(path: P, format: &AudioFormat) -> Result<Self> {
        Ok(Self::new(File::open(path)?, format))
    }
}

impl ReadSource<Cursor<Vec<u8>>> {
    /// Serves the audio from an in-memory buffer.
    pub fn from_bytes<B: Into<Vec<u8>>>(data: B, format: &AudioFormat) -> Self {
        Self::new(Cursor::new(data.into()), format)
    }
}

impl<R: Read + Send> AudioSource for ReadSource<R> {
    fn format(&mut self, capacity: u16) -> Result<(AudioFormatDescriptor, u16)> {
        Ok(self.format.fit(capacity))
    }

    fn read(&mut self, buffer: &mut [u8]) -> Result<usize> {
        let reader = match self.reader.as_mut() {
            Some(reader) => reader,
            None => return Ok(0),
        };
        loop {
            match reader.read(buffer) {
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                result => return Ok(result?),
            }
        }
    }

    fn close(&mut self) {
        self.reader = None;
    }
}
