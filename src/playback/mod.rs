//! Track preview playback
//!
//! A small state machine ([`Player`]) over a [`Mixer`] that does the actual
//! audio output. [`RodioMixer`] plays through the default output device.

mod mixer;

use std::time::Duration;

pub use mixer::RodioMixer;

use crate::core::Track;
use crate::error::PlaybackError;

/// Audio output used by [`Player`]
pub trait Mixer {
    /// Load a file, replacing whatever was loaded before
    fn load(&mut self, track: &Track) -> Result<(), PlaybackError>;
    fn play(&mut self);
    fn pause(&mut self);
    fn resume(&mut self);
    fn stop(&mut self);
    /// Playback position of the loaded file
    fn position(&self) -> Duration;
    /// True while the loaded file still has audio left to play
    fn is_busy(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Preview player: play, pause, resume, stop
pub struct Player<M: Mixer> {
    mixer: M,
    state: PlaybackState,
    current: Option<Track>,
}

impl<M: Mixer> Player<M> {
    pub fn new(mixer: M) -> Self {
        Self {
            mixer,
            state: PlaybackState::Stopped,
            current: None,
        }
    }

    /// Start playing `track` from the beginning
    ///
    /// If the file cannot be loaded the player ends up stopped.
    pub fn play(&mut self, track: &Track) -> Result<(), PlaybackError> {
        if let Err(e) = self.mixer.load(track) {
            log::warn!("Could not play {:?}: {}", track.source_path, e);
            self.stop();
            return Err(e);
        }
        self.mixer.play();
        self.current = Some(track.clone());
        self.state = PlaybackState::Playing;
        log::debug!("Playing {:?}", track.source_path);
        Ok(())
    }

    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.mixer.pause();
            self.state = PlaybackState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == PlaybackState::Paused {
            self.mixer.resume();
            self.state = PlaybackState::Playing;
        }
    }

    pub fn stop(&mut self) {
        self.mixer.stop();
        self.current = None;
        self.state = PlaybackState::Stopped;
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    /// Playing and the output still has audio left
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing && self.mixer.is_busy()
    }

    pub fn is_paused(&self) -> bool {
        self.state == PlaybackState::Paused
    }

    /// Position in the current track; None when stopped
    pub fn position(&self) -> Option<Duration> {
        match self.state {
            PlaybackState::Stopped => None,
            PlaybackState::Playing | PlaybackState::Paused => Some(self.mixer.position()),
        }
    }
}
