#![allow(dead_code)]

use std::collections::{BTreeMap, VecDeque};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use spx_lite::audio::{AudioFormatDescriptor, AudioSource};
use spx_lite::engine::{
    Engine, EngineInput, ModelSource, RecognizerKind, RecognizerRequest, TriggerSource,
};
use spx_lite::ffi::{Handle, HandleKind, RawAudioFormat, RawStreamRef};
use spx_lite::stt::{
    EventHandler, ParameterValue, Parameters, Reason, RecognitionEvent, RecognitionResult,
};
use spx_lite::{Error, Result};

/// What a [`MockSource`] has been asked to do.
#[derive(Debug, Default)]
pub struct SourceLog {
    pub format_calls: usize,
    pub size_calls: usize,
    pub reads: Vec<usize>,
    pub closes: usize,
    pub dropped: bool,
}

/// An audio source that serves canned chunks and records every call.
pub struct MockSource {
    pub format: AudioFormatDescriptor,
    pub chunks: VecDeque<Vec<u8>>,
    pub fail_format: bool,
    pub fail_read: bool,
    pub panic_on_read: bool,
    pub overreport: usize,
    /// Byte count to report from `format` instead of the descriptor size.
    pub format_written: Option<u16>,
    pub log: Arc<Mutex<SourceLog>>,
}

impl MockSource {
    pub fn new(format: AudioFormatDescriptor, chunks: Vec<Vec<u8>>) -> (Self, Arc<Mutex<SourceLog>>) {
        let log = Arc::new(Mutex::new(SourceLog::default()));
        let source = Self {
            format,
            chunks: chunks.into(),
            fail_format: false,
            fail_read: false,
            panic_on_read: false,
            overreport: 0,
            format_written: None,
            log: log.clone(),
        };
        (source, log)
    }
}

impl AudioSource for MockSource {
    fn format(&mut self, capacity: u16) -> Result<(AudioFormatDescriptor, u16)> {
        self.log.lock().unwrap().format_calls += 1;
        if self.fail_format {
            return Err(Error::engine(0x8000_0005, "format unavailable"));
        }
        match self.format_written {
            Some(written) => Ok((self.format, written)),
            None => Ok(self.format.fit(capacity)),
        }
    }

    fn format_size(&mut self) -> Result<u16> {
        self.log.lock().unwrap().size_calls += 1;
        Ok(AudioFormatDescriptor::SIZE)
    }

    fn read(&mut self, buffer: &mut [u8]) -> Result<usize> {
        if self.panic_on_read {
            panic!("mock source exploded");
        }
        if self.fail_read {
            self.log.lock().unwrap().reads.push(0);
            return Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone").into());
        }
        let count = match self.chunks.pop_front() {
            Some(chunk) => {
                let count = chunk.len().min(buffer.len());
                buffer[..count].copy_from_slice(&chunk[..count]);
                if count < chunk.len() {
                    self.chunks.push_front(chunk[count..].to_vec());
                }
                count
            }
            None => 0,
        };
        self.log.lock().unwrap().reads.push(count);
        Ok(count + self.overreport)
    }

    fn close(&mut self) {
        self.log.lock().unwrap().closes += 1;
    }
}

impl Drop for MockSource {
    fn drop(&mut self) {
        self.log.lock().unwrap().dropped = true;
    }
}

/// Pulls a stream the way a well-behaved engine does: size query, format, reads until the first
/// zero, then close. Returns the format and the byte counts of every read.
pub fn drain(stream: &RawStreamRef, chunk: usize) -> (Option<RawAudioFormat>, Vec<u32>) {
    let mut format = RawAudioFormat::default();
    let format = unsafe {
        if stream.format_size() >= RawAudioFormat::SIZE && stream.get_format(&mut format) > 0 {
            Some(format)
        } else {
            None
        }
    };
    let mut buffer = vec![0u8; chunk];
    let mut counts = Vec::new();
    loop {
        let count = unsafe { stream.read(&mut buffer) };
        counts.push(count);
        if count == 0 {
            break;
        }
    }
    unsafe { stream.close() };
    (format, counts)
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecordedInput {
    Default,
    File(PathBuf),
    Stream,
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub handle: Handle,
    pub kind: RecognizerKind,
    pub language: Option<String>,
    pub input: RecordedInput,
    pub parameters: Parameters,
}

#[derive(Default)]
pub struct EngineState {
    next_handle: usize,
    pub fail_create: bool,
    pub requests: Vec<RecordedRequest>,
    pub streams: BTreeMap<Handle, RawStreamRef>,
    pub handlers: BTreeMap<Handle, Arc<dyn EventHandler>>,
    pub calls: Vec<String>,
    pub parameters: Vec<(Handle, String, ParameterValue)>,
    pub models: Vec<(Handle, ModelSource)>,
    pub triggers: Vec<(Handle, String)>,
    pub intents: Vec<(Handle, String, Handle)>,
    pub closed: Vec<(HandleKind, Handle)>,
    /// For every closed recognizer with stream input: was the stream still registered?
    pub stream_alive_at_close: Vec<bool>,
}

/// An engine double that records every call and "recognizes" by draining the input stream.
#[derive(Default)]
pub struct RecordingEngine {
    pub state: Mutex<EngineState>,
}

impl RecordingEngine {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        let engine = Self::default();
        engine.state.lock().unwrap().fail_create = true;
        Arc::new(engine)
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.state.lock().unwrap().requests.last().cloned().expect("no recognizer created")
    }

    fn allocate(&self) -> Handle {
        let mut state = self.state.lock().unwrap();
        state.next_handle += 1;
        Handle(state.next_handle)
    }

    fn emit(&self, recognizer: Handle, event: RecognitionEvent) {
        let handler = self.state.lock().unwrap().handlers.get(&recognizer).cloned();
        if let Some(handler) = handler {
            handler.on_event(event);
        }
    }
}

impl Engine for RecordingEngine {
    fn create_recognizer(&self, request: &RecognizerRequest<'_>) -> Result<Handle> {
        if self.state.lock().unwrap().fail_create {
            return Err(Error::engine(0x8000_4005, "engine unavailable"));
        }
        let handle = self.allocate();
        let mut state = self.state.lock().unwrap();
        let input = match request.input {
            EngineInput::Default => RecordedInput::Default,
            EngineInput::File(path) => RecordedInput::File(path.to_path_buf()),
            EngineInput::Stream(stream) => {
                state.streams.insert(handle, stream);
                RecordedInput::Stream
            }
        };
        state.requests.push(RecordedRequest {
            handle,
            kind: request.kind.clone(),
            language: request.language.map(str::to_string),
            input,
            parameters: request.parameters.clone(),
        });
        Ok(handle)
    }

    fn recognize_once(&self, recognizer: Handle) -> Result<RecognitionResult> {
        self.state.lock().unwrap().calls.push("recognize".into());
        self.emit(recognizer, RecognitionEvent::SessionStarted);
        let stream = self.state.lock().unwrap().streams.get(&recognizer).copied();
        let result = match stream {
            Some(stream) => {
                let (format, counts) = drain(&stream, 3200);
                let total: u32 = counts.iter().sum();
                match format {
                    Some(format) if total > 0 => {
                        let partial = RecognitionResult::new(Reason::IntermediateResult, "...");
                        self.emit(recognizer, RecognitionEvent::Intermediate(partial));
                        RecognitionResult::new(
                            Reason::Recognized,
                            format!("{} bytes at {} Hz", total, format.samples_per_sec),
                        )
                    }
                    _ => RecognitionResult::new(Reason::NoMatch, ""),
                }
            }
            None => RecognitionResult::new(Reason::Recognized, "hello world"),
        };
        self.emit(recognizer, RecognitionEvent::Final(result.clone()));
        self.emit(recognizer, RecognitionEvent::SessionStopped);
        Ok(result)
    }

    fn start_continuous_recognition(&self, _recognizer: Handle) -> Result<()> {
        self.state.lock().unwrap().calls.push("start_continuous".into());
        Ok(())
    }

    fn stop_continuous_recognition(&self, _recognizer: Handle) -> Result<()> {
        self.state.lock().unwrap().calls.push("stop_continuous".into());
        Ok(())
    }

    fn start_keyword_recognition(&self, _recognizer: Handle, keyword: &str) -> Result<()> {
        self.state.lock().unwrap().calls.push(format!("start_keyword:{}", keyword));
        Ok(())
    }

    fn stop_keyword_recognition(&self, _recognizer: Handle) -> Result<()> {
        self.state.lock().unwrap().calls.push("stop_keyword".into());
        Ok(())
    }

    fn set_recognizer_parameter(
        &self,
        recognizer: Handle,
        name: &str,
        value: &ParameterValue,
    ) -> Result<()> {
        self.state.lock().unwrap().parameters.push((recognizer, name.to_string(), value.clone()));
        Ok(())
    }

    fn connect_events(&self, recognizer: Handle, handler: Arc<dyn EventHandler>) -> Result<()> {
        self.state.lock().unwrap().handlers.insert(recognizer, handler);
        Ok(())
    }

    fn create_language_model(&self, source: &ModelSource) -> Result<Handle> {
        let handle = self.allocate();
        self.state.lock().unwrap().models.push((handle, source.clone()));
        Ok(handle)
    }

    fn create_intent_trigger(&self, source: &TriggerSource<'_>) -> Result<Handle> {
        let handle = self.allocate();
        let description = match source {
            TriggerSource::Phrase(phrase) => format!("phrase:{}", phrase),
            TriggerSource::Model(model) => format!("model:{}", model.0),
            TriggerSource::ModelIntent(model, name) => format!("model:{}:{}", model.0, name),
        };
        self.state.lock().unwrap().triggers.push((handle, description));
        Ok(handle)
    }

    fn add_intent(&self, recognizer: Handle, intent_id: &str, trigger: Handle) -> Result<()> {
        self.state.lock().unwrap().intents.push((recognizer, intent_id.to_string(), trigger));
        Ok(())
    }

    fn close_handle(&self, kind: HandleKind, handle: Handle) {
        let mut state = self.state.lock().unwrap();
        if let Some(stream) = state.streams.remove(&handle) {
            // A live context answers the size query; a revoked one yields the sentinel.
            let table = unsafe { *stream.as_ptr() };
            let alive = unsafe { (table.get_format)(stream.as_ptr(), std::ptr::null_mut(), 0) } > 0;
            state.stream_alive_at_close.push(alive);
        }
        state.handlers.remove(&handle);
        state.closed.push((kind, handle));
    }
}
