//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// Failures while starting or feeding background music
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output device: {0}")]
    NoOutputDevice(#[from] rodio::StreamError),

    #[error("failed to create audio sink: {0}")]
    Sink(#[from] rodio::PlayError),

    #[error("failed to open music file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode music: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),
}

/// Failures while reading the content settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings json: {0}")]
    Parse(#[from] serde_json::Error),
}
