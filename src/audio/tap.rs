//! Sample tap between the decoder and the output device.
//!
//! The device callback pulls samples through [`TappedSource`], which
//! down-mixes each frame to mono and pushes it into a shared
//! [`SampleWindow`] that the analyser reads on the render thread.

use std::collections::VecDeque;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use rodio::Source;

/// Most recent mono samples heard by the output device (thread-safe)
#[derive(Debug, Clone)]
pub struct SampleWindow {
    inner: Arc<Mutex<VecDeque<f32>>>,
    capacity: usize,
}

impl SampleWindow {
    /// Create an empty window holding at most `capacity` samples
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    /// Append one sample, evicting the oldest once full
    pub fn push(&self, sample: f32) {
        let mut samples = self.inner.lock();
        if samples.len() == self.capacity {
            samples.pop_front();
        }
        samples.push_back(sample);
    }

    /// Copy the window into `out`, oldest first.
    ///
    /// Before the window has filled, the missing leading samples are
    /// written as silence so the newest sample always lands last.
    pub fn copy_latest(&self, out: &mut [f32]) {
        let samples = self.inner.lock();
        let available = samples.len().min(out.len());
        let pad = out.len() - available;
        out[..pad].fill(0.0);
        let skip = samples.len() - available;
        for (dst, src) in out[pad..].iter_mut().zip(samples.iter().skip(skip)) {
            *dst = *src;
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Source adapter that copies every frame it yields into a [`SampleWindow`]
pub struct TappedSource<S> {
    inner: S,
    window: SampleWindow,
    frame_sum: f32,
    frame_pos: u16,
    started: Option<Sender<()>>,
}

impl<S> TappedSource<S>
where
    S: Source<Item = f32>,
{
    /// Wrap `inner`; `started` fires once, when the first sample is pulled
    pub fn new(inner: S, window: SampleWindow, started: Option<Sender<()>>) -> Self {
        Self {
            inner,
            window,
            frame_sum: 0.0,
            frame_pos: 0,
            started,
        }
    }
}

impl<S> Iterator for TappedSource<S>
where
    S: Source<Item = f32>,
{
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        let sample = self.inner.next()?;

        if let Some(started) = self.started.take() {
            // Receiver may already be gone; playback continues regardless
            let _ = started.send(());
        }

        let channels = self.inner.channels().max(1);
        self.frame_sum += sample;
        self.frame_pos += 1;
        if self.frame_pos >= channels {
            self.window.push(self.frame_sum / channels as f32);
            self.frame_sum = 0.0;
            self.frame_pos = 0;
        }

        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<S> Source for TappedSource<S>
where
    S: Source<Item = f32>,
{
    fn current_frame_len(&self) -> Option<usize> {
        self.inner.current_frame_len()
    }

    fn channels(&self) -> u16 {
        self.inner.channels()
    }

    fn sample_rate(&self) -> u32 {
        self.inner.sample_rate()
    }

    fn total_duration(&self) -> Option<Duration> {
        self.inner.total_duration()
    }
}
