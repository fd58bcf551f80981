use crate::audio_log;

use super::{AudioHandle, AudioPlayer};

/// Matches the number of simultaneous sources the sound system hands out.
pub const MAX_PENDING_SOUNDS: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundRequest {
    pub handle: AudioHandle,
    pub name: String,
}

/// Buffers playback requests until the mixer (or a test) drains them.
pub struct SoundQueue {
    pending: Vec<SoundRequest>,
    capacity: usize,
    dropped: usize,
}

impl SoundQueue {
    pub fn new() -> SoundQueue {
        SoundQueue::with_capacity(MAX_PENDING_SOUNDS)
    }

    pub fn with_capacity(capacity: usize) -> SoundQueue {
        SoundQueue {
            pending: Vec::with_capacity(capacity),
            capacity,
            dropped: 0,
        }
    }

    pub fn pending(&self) -> &[SoundRequest] {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Total requests rejected because the queue was full.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn drain(&mut self) -> Vec<SoundRequest> {
        std::mem::take(&mut self.pending)
    }
}

impl Default for SoundQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioPlayer for SoundQueue {
    fn play(&mut self, handle: AudioHandle, name: &str) {
        if self.pending.len() >= self.capacity {
            self.dropped += 1;
            audio_log!(WARN, "Sound queue full ({}), dropping {}", self.capacity, name);
            return;
        }

        audio_log!(TRACE, "Queued sound {} ({:?})", name, handle);
        self.pending.push(SoundRequest {
            handle,
            name: name.to_owned(),
        });
    }
}
