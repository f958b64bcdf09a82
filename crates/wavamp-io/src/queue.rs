//! Audio device queue shared between the UI thread and the audio callback.

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Interleaved f32 samples waiting to be played.
///
/// The UI thread [`push`](Self::push)es, the audio callback
/// [`fill`](Self::fill)s its output buffer from the front. The lock is only
/// held for a copy; the paused flag and the played-frame counter are atomics
/// so the UI can read them without contending with the callback.
#[derive(Debug)]
pub struct AudioQueue {
    samples: Mutex<VecDeque<f32>>,
    channels: u16,
    paused: AtomicBool,
    played_frames: AtomicU64,
}

impl AudioQueue {
    /// Create an empty queue for `channels`-channel audio. Starts paused.
    pub fn new(channels: u16) -> Self {
        Self {
            samples: Mutex::new(VecDeque::new()),
            channels: channels.max(1),
            paused: AtomicBool::new(true),
            played_frames: AtomicU64::new(0),
        }
    }

    /// Append samples to the back of the queue.
    pub fn push(&self, samples: &[f32]) {
        self.samples.lock().extend(samples.iter().copied());
    }

    /// Drop everything still queued.
    pub fn clear(&self) {
        self.samples.lock().clear();
    }

    /// Samples currently queued.
    pub fn queued_samples(&self) -> usize {
        self.samples.lock().len()
    }

    /// Whole frames currently queued.
    pub fn queued_frames(&self) -> usize {
        self.queued_samples() / self.channels as usize
    }

    /// Pause or resume consumption.
    pub fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::SeqCst);
    }

    /// Whether consumption is paused.
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    /// Frames handed to the device since creation or the last
    /// [`reset_played`](Self::reset_played).
    pub fn played_frames(&self) -> u64 {
        self.played_frames.load(Ordering::Relaxed)
    }

    /// Zero the played-frame counter.
    pub fn reset_played(&self) {
        self.played_frames.store(0, Ordering::Relaxed);
    }

    /// Fill an output buffer from the queue (audio callback side).
    ///
    /// While paused the buffer is silenced and nothing is consumed. On
    /// underrun the tail of the buffer is silenced. Returns the number of
    /// samples taken from the queue.
    pub fn fill(&self, data: &mut [f32]) -> usize {
        if self.is_paused() {
            data.fill(0.0);
            return 0;
        }

        let taken = {
            let mut queue = self.samples.lock();
            let n = data.len().min(queue.len());
            for (slot, sample) in data.iter_mut().zip(queue.drain(..n)) {
                *slot = sample;
            }
            n
        };
        data[taken..].fill(0.0);

        self.played_frames
            .fetch_add((taken / self.channels as usize) as u64, Ordering::Relaxed);
        taken
    }
}
