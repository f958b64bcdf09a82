//! Streaming sample-format conversion.
//!
//! [`FormatConverter`] accepts interleaved f32 audio in one [`AudioSpec`] and
//! produces it in another. Source frames are first remapped to the
//! destination channel count, then resampled by linear interpolation.
//!
//! Input can arrive in arbitrary chunks. Until [`flush`](FormatConverter::flush)
//! is called the converter holds back the last source frame, since the
//! interpolation needs the frame after it.

use std::collections::VecDeque;

/// Sample rate and channel layout of interleaved f32 audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioSpec {
    /// Frames per second.
    pub sample_rate: u32,
    /// Interleaved channels per frame.
    pub channels: u16,
}

impl AudioSpec {
    /// Create a spec.
    pub const fn new(sample_rate: u32, channels: u16) -> Self {
        Self {
            sample_rate,
            channels,
        }
    }
}

impl Default for AudioSpec {
    /// 48 kHz stereo.
    fn default() -> Self {
        Self::new(48000, 2)
    }
}

impl std::fmt::Display for AudioSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Hz, {} ch", self.sample_rate, self.channels)
    }
}

/// Converts interleaved f32 audio between [`AudioSpec`]s.
#[derive(Debug)]
pub struct FormatConverter {
    src: AudioSpec,
    dst: AudioSpec,
    /// Source frames already remapped to `dst.channels`, not yet consumed.
    pending: Vec<f32>,
    /// Read position into `pending` in units of `1 / dst.sample_rate` frames,
    /// so stepping by `src.sample_rate` per output frame stays exact.
    position: u64,
    output: VecDeque<f32>,
    flushed: bool,
}

impl FormatConverter {
    /// Create a converter from `src` to `dst`.
    ///
    /// Zero rates or channel counts are treated as 1 so the converter can
    /// never divide by zero.
    pub fn new(src: AudioSpec, dst: AudioSpec) -> Self {
        let src = sanitize(src);
        let dst = sanitize(dst);
        tracing::debug!(%src, %dst, "format converter created");
        Self {
            src,
            dst,
            pending: Vec::new(),
            position: 0,
            output: VecDeque::new(),
            flushed: false,
        }
    }

    /// Append interleaved source samples.
    ///
    /// A trailing partial frame is dropped. Input after [`flush`](Self::flush)
    /// starts a new stream segment.
    pub fn put(&mut self, samples: &[f32]) {
        self.flushed = false;
        let src_ch = self.src.channels as usize;
        let dst_ch = self.dst.channels as usize;
        self.pending.reserve(samples.len() / src_ch * dst_ch);
        for frame in samples.chunks_exact(src_ch) {
            remap_frame(frame, dst_ch, &mut self.pending);
        }
        self.convert_pending();
    }

    /// Mark the end of input so every buffered source frame gets converted.
    pub fn flush(&mut self) {
        self.flushed = true;
        self.convert_pending();
    }

    /// Converted samples ready to [`get`](Self::get).
    pub fn available(&self) -> usize {
        self.output.len()
    }

    /// Pop up to `out.len()` converted samples, whole frames only.
    ///
    /// Returns the number of samples written.
    pub fn get(&mut self, out: &mut [f32]) -> usize {
        let dst_ch = self.dst.channels as usize;
        let n = (out.len().min(self.output.len()) / dst_ch) * dst_ch;
        for (slot, sample) in out.iter_mut().zip(self.output.drain(..n)) {
            *slot = sample;
        }
        n
    }

    /// Drop all buffered input and output.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.output.clear();
        self.position = 0;
        self.flushed = false;
    }

    fn convert_pending(&mut self) {
        let ch = self.dst.channels as usize;
        let frames = self.pending.len() / ch;
        if frames == 0 {
            return;
        }

        // Without more input the last frame has no right-hand neighbour.
        let limit = if self.flushed { frames } else { frames - 1 };
        let denom = u64::from(self.dst.sample_rate);
        let step = u64::from(self.src.sample_rate);

        while ((self.position / denom) as usize) < limit {
            let idx = (self.position / denom) as usize;
            let frac = (self.position % denom) as f32 / denom as f32;
            let next = (idx + 1).min(frames - 1);
            let a = &self.pending[idx * ch..(idx + 1) * ch];
            let b = &self.pending[next * ch..(next + 1) * ch];
            for c in 0..ch {
                self.output.push_back(a[c] + (b[c] - a[c]) * frac);
            }
            self.position += step;
        }

        let consumed = ((self.position / denom) as usize).min(frames);
        if consumed > 0 {
            self.pending.drain(..consumed * ch);
            self.position -= consumed as u64 * denom;
        }

        if self.flushed && self.pending.is_empty() {
            self.position = 0;
        }
    }
}

fn sanitize(spec: AudioSpec) -> AudioSpec {
    AudioSpec::new(spec.sample_rate.max(1), spec.channels.max(1))
}

/// Append one source frame to `out` with `dst_ch` channels.
fn remap_frame(frame: &[f32], dst_ch: usize, out: &mut Vec<f32>) {
    let src_ch = frame.len();
    if src_ch == dst_ch {
        out.extend_from_slice(frame);
    } else if dst_ch == 1 {
        out.push(frame.iter().sum::<f32>() / src_ch as f32);
    } else if src_ch == 1 {
        out.extend(std::iter::repeat_n(frame[0], dst_ch));
    } else {
        let shared = src_ch.min(dst_ch);
        out.extend_from_slice(&frame[..shared]);
        out.extend(std::iter::repeat_n(0.0, dst_ch - shared));
    }
}
