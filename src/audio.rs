//! Audio collaborator
//!
//! Maps simulation events to sound effects. Each effect carries a small
//! procedural tone recipe so a backend can synthesize it without asset files;
//! the backend itself lives behind `SoundSink` and is owned by the host.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Mover scraped a wall
    Collision,
    /// Mover dropped into a hole
    Score,
    /// Round over
    GameOver,
}

impl From<GameEvent> for SoundEffect {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::Collision => SoundEffect::Collision,
            GameEvent::Score => SoundEffect::Score,
            GameEvent::GameOver => SoundEffect::GameOver,
        }
    }
}

/// Oscillator waveform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
    Square,
    Sawtooth,
}

/// Procedural tone: a pitch sweep under an exponential gain decay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub waveform: Waveform,
    pub start_hz: f32,
    pub end_hz: f32,
    /// Seconds until the tone is stopped
    pub duration: f32,
    /// Peak gain before volume scaling
    pub gain: f32,
}

impl SoundEffect {
    pub fn tone(self) -> Tone {
        match self {
            // Dull thump
            SoundEffect::Collision => Tone {
                waveform: Waveform::Sine,
                start_hz: 150.0,
                end_hz: 60.0,
                duration: 0.15,
                gain: 0.6,
            },
            // Rising chirp
            SoundEffect::Score => Tone {
                waveform: Waveform::Triangle,
                start_hz: 440.0,
                end_hz: 880.0,
                duration: 0.25,
                gain: 0.5,
            },
            // Long falling buzz
            SoundEffect::GameOver => Tone {
                waveform: Waveform::Sawtooth,
                start_hz: 300.0,
                end_hz: 80.0,
                duration: 1.2,
                gain: 0.4,
            },
        }
    }
}

/// Playback backend supplied by the host
pub trait SoundSink {
    /// Start `tone` for `effect` at `volume` (0.0 - 1.0, already mixed)
    fn play(&mut self, effect: SoundEffect, tone: Tone, volume: f32);
}

/// Audio manager for the game
pub struct AudioManager<S: SoundSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<S: SoundSink> AudioManager<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Apply the audio section of the settings
    pub fn from_settings(sink: S, settings: &crate::Settings) -> Self {
        let mut audio = Self::new(sink);
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.sink.play(effect, effect.tone(), vol);
    }

    /// Play one effect per event, in order
    pub fn dispatch(&mut self, events: &[GameEvent]) {
        for &event in events {
            self.play(event.into());
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

/// Sink that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogSink;

impl SoundSink for LogSink {
    fn play(&mut self, effect: SoundEffect, tone: Tone, volume: f32) {
        log::debug!(
            "sound {:?}: {:?} {:.0}->{:.0} Hz for {:.2}s at {:.2}",
            effect,
            tone.waveform,
            tone.start_hz,
            tone.end_hz,
            tone.duration,
            volume * tone.gain
        );
    }
}
