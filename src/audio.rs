//! Background music playback

use crate::error::AudioError;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Playback handle the experience talks to
pub trait MusicPlayer {
    /// Start or resume playback
    fn play(&mut self) -> Result<(), AudioError>;
    fn pause(&mut self);
    fn is_paused(&self) -> bool;
    fn volume(&self) -> f32;
    fn set_volume(&mut self, volume: f32);
    /// Go back to the start; takes effect on the next `play`
    fn rewind(&mut self);
}

/// Looping music file played through the default output device
pub struct RodioMusic {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    path: PathBuf,
    sink: Option<Sink>,
    volume: f32,
}

impl RodioMusic {
    pub fn new(path: PathBuf) -> Result<Self, AudioError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
            path,
            sink: None,
            volume: 1.0,
        })
    }

    fn start_sink(&self) -> Result<Sink, AudioError> {
        let file = File::open(&self.path).map_err(|source| AudioError::Open {
            path: self.path.clone(),
            source,
        })?;
        let source = Decoder::new(BufReader::new(file))?;
        let sink = Sink::try_new(&self.handle)?;
        sink.set_volume(self.volume);
        sink.append(source.repeat_infinite());
        Ok(sink)
    }
}

impl MusicPlayer for RodioMusic {
    fn play(&mut self) -> Result<(), AudioError> {
        match &self.sink {
            Some(sink) => sink.play(),
            None => self.sink = Some(self.start_sink()?),
        }
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(sink) = &self.sink {
            sink.pause();
        }
    }

    fn is_paused(&self) -> bool {
        self.sink.as_ref().map(|s| s.is_paused()).unwrap_or(true)
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        if let Some(sink) = &self.sink {
            sink.set_volume(self.volume);
        }
    }

    fn rewind(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }
}

/// Stand-in when no output device is available
#[derive(Debug, Default)]
pub struct Silence {
    volume: f32,
    playing: bool,
}

impl MusicPlayer for Silence {
    fn play(&mut self) -> Result<(), AudioError> {
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn is_paused(&self) -> bool {
        !self.playing
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn rewind(&mut self) {}
}

/// Open the music file on the default device, or fall back to silence
pub fn open_music(path: PathBuf) -> Box<dyn MusicPlayer> {
    match RodioMusic::new(path) {
        Ok(music) => Box::new(music),
        Err(err) => {
            tracing::warn!("music disabled: {err}");
            Box::new(Silence::default())
        }
    }
}
