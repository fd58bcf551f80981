mod sound_queue;

pub use sound_queue::{SoundQueue, SoundRequest, MAX_PENDING_SOUNDS};

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

/// Identifies one playback request so it can be tracked after it is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AudioHandle(u64);

impl AudioHandle {
    pub fn new() -> AudioHandle {
        AudioHandle(NEXT_HANDLE.fetch_add(1, Ordering::Relaxed))
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

impl Default for AudioHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Sink for playback requests. The sound name is an opaque identifier
/// (for turok content, a sound shader path) resolved by the implementor.
pub trait AudioPlayer {
    fn play(&mut self, handle: AudioHandle, name: &str);
}

impl<T: AudioPlayer + ?Sized> AudioPlayer for Box<T> {
    fn play(&mut self, handle: AudioHandle, name: &str) {
        (**self).play(handle, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_are_unique() {
        let a = AudioHandle::new();
        let b = AudioHandle::new();
        assert_ne!(a, b);
        assert!(b.id() > a.id());
    }
}
