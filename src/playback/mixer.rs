//! Mixer backed by `rodio` and the default output device.

use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};

use super::Mixer;
use crate::core::Track;
use crate::error::PlaybackError;

pub struct RodioMixer {
    stream: OutputStream,
    sink: Option<Sink>,
}

impl RodioMixer {
    /// Open the system's default audio output
    pub fn open_default() -> Result<Self, PlaybackError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| PlaybackError(format!("No audio output device: {}", e)))?;
        // rodio prints to stderr when the stream is dropped
        stream.log_on_drop(false);

        Ok(Self { stream, sink: None })
    }
}

impl Mixer for RodioMixer {
    fn load(&mut self, track: &Track) -> Result<(), PlaybackError> {
        self.stop();

        let file = File::open(&track.source_path)
            .map_err(|e| PlaybackError(format!("Failed to open {:?}: {}", track.source_path, e)))?;
        let source = Decoder::new(BufReader::new(file)).map_err(|e| {
            PlaybackError(format!("Failed to decode {:?}: {}", track.source_path, e))
        })?;

        let sink = Sink::connect_new(self.stream.mixer());
        sink.pause();
        sink.append(source);
        self.sink = Some(sink);
        Ok(())
    }

    fn play(&mut self) {
        if let Some(sink) = &self.sink {
            sink.play();
        }
    }

    fn pause(&mut self) {
        if let Some(sink) = &self.sink {
            sink.pause();
        }
    }

    fn resume(&mut self) {
        self.play();
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }

    fn position(&self) -> Duration {
        self.sink
            .as_ref()
            .map(|sink| sink.get_pos())
            .unwrap_or(Duration::ZERO)
    }

    fn is_busy(&self) -> bool {
        self.sink.as_ref().is_some_and(|sink| !sink.empty())
    }
}
