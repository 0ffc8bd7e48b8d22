//! Progress display for frame acquisition

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

use crate::io::source::FrameSource;
use crate::spatial::frame::Frame;

static BOUNDED_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Frames: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static UNBOUNDED_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner} [{elapsed_precise}] Frames: {pos}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Frame source wrapper that ticks a progress bar for every delivered frame
///
/// The bar is bounded when the number of frames to analyze is known and falls
/// back to a spinner otherwise. It is cleared once the inner source runs dry.
pub struct ProgressSource<S> {
    inner: S,
    bar: ProgressBar,
}

impl<S: FrameSource> ProgressSource<S> {
    /// Wrap a source, `frames_to_analyze` of 0 means the length is unknown
    pub fn new(inner: S, frames_to_analyze: u32) -> Self {
        let bar = if frames_to_analyze == 0 {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(UNBOUNDED_STYLE.clone());
            spinner
        } else {
            let bounded = ProgressBar::new(u64::from(frames_to_analyze));
            bounded.set_style(BOUNDED_STYLE.clone());
            bounded
        };

        Self { inner, bar }
    }

    /// Wrap a source with a hidden bar, useful when output is suppressed
    pub fn hidden(inner: S) -> Self {
        Self {
            inner,
            bar: ProgressBar::hidden(),
        }
    }

    /// Number of frames delivered so far
    pub fn delivered(&self) -> u64 {
        self.bar.position()
    }

    /// Release the inner source
    pub fn into_inner(self) -> S {
        self.bar.finish_and_clear();
        self.inner
    }
}

impl<S: FrameSource> FrameSource for ProgressSource<S> {
    fn is_ready(&self) -> bool {
        self.inner.is_ready()
    }

    fn next_frame(&mut self) -> Option<Frame> {
        let frame = self.inner.next_frame();
        if frame.is_some() {
            self.bar.inc(1);
        } else {
            self.bar.finish_and_clear();
        }
        frame
    }
}
