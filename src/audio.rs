//! Sound effects and ambient loops via `rodio`.
//!
//! One output stream for the whole session. The page-turn cue is a detached
//! one-shot; the ambient loop owns a sink so it can be stopped, and a fresh
//! sink per start means the loop always resumes from the beginning. Every
//! failure here is logged and swallowed: a viewer without sound is still a
//! viewer.

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

struct AmbientLoop {
    sink: Sink,
    path: PathBuf,
}

pub struct AudioPlayer {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    ambient: Option<AmbientLoop>,
    volume: f32,
    muted: bool,
}

impl AudioPlayer {
    /// None when no output device is available; callers degrade silently.
    pub fn new(volume: f32, muted: bool) -> Option<Self> {
        match OutputStream::try_default() {
            Ok((stream, handle)) => {
                info!(volume, muted, "Audio output ready");
                Some(AudioPlayer {
                    _stream: stream,
                    handle,
                    ambient: None,
                    volume: volume.clamp(0.0, 1.0),
                    muted,
                })
            }
            Err(err) => {
                warn!("No audio output available, continuing silent: {err}");
                None
            }
        }
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.volume }
    }

    /// Fire-and-forget page-turn cue.
    pub fn play_one_shot(&self, path: &Path) {
        if self.muted {
            return;
        }
        let source = match open_source(path) {
            Some(source) => source,
            None => return,
        };
        match Sink::try_new(&self.handle) {
            Ok(sink) => {
                sink.set_volume(self.volume);
                sink.append(source);
                sink.detach();
            }
            Err(err) => warn!(path = %path.display(), "Could not play cue: {err}"),
        }
    }

    /// Start looping `path`, replacing any current loop. Restarting the same
    /// path is a no-op so hover jitter does not rewind the sound.
    pub fn start_ambient(&mut self, path: &Path) {
        if self
            .ambient
            .as_ref()
            .map(|current| current.path == path)
            .unwrap_or(false)
        {
            return;
        }
        self.stop_ambient();
        let source = match open_source(path) {
            Some(source) => source,
            None => return,
        };
        match Sink::try_new(&self.handle) {
            Ok(sink) => {
                sink.set_volume(self.effective_volume());
                sink.append(source.repeat_infinite());
                debug!(path = %path.display(), "Ambient loop started");
                self.ambient = Some(AmbientLoop {
                    sink,
                    path: path.to_path_buf(),
                });
            }
            Err(err) => warn!(path = %path.display(), "Could not start ambient loop: {err}"),
        }
    }

    /// Stop the loop; the next start plays from the beginning again.
    pub fn stop_ambient(&mut self) {
        if let Some(ambient) = self.ambient.take() {
            debug!(path = %ambient.path.display(), "Ambient loop stopped");
            ambient.sink.stop();
        }
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        if let Some(ambient) = &self.ambient {
            ambient.sink.set_volume(self.effective_volume());
        }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if let Some(ambient) = &self.ambient {
            ambient.sink.set_volume(self.effective_volume());
        }
    }
}

fn open_source(path: &Path) -> Option<Decoder<BufReader<File>>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            warn!(path = %path.display(), "Could not open audio file: {err}");
            return None;
        }
    };
    match Decoder::new(BufReader::new(file)) {
        Ok(source) => Some(source),
        Err(err) => {
            warn!(path = %path.display(), "Could not decode audio file: {err}");
            None
        }
    }
}
