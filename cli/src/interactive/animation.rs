//! Animation timing for the interactive UI
//!
//! Frame positions are derived from elapsed wall time, so a widget only
//! needs a periodic re-render to stay in step.

use comment_docs_core::LottieSummary;
use std::time::{Duration, Instant};

/// Shortest redraw interval for the animation widget
pub const MIN_FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Spinner animation for loading display
#[derive(Debug, Clone)]
pub struct SpinnerAnimation {
    chars: &'static [&'static str],
    frame_interval: Duration,
    start_time: Instant,
}

impl SpinnerAnimation {
    /// Create new spinner animation
    pub fn new() -> Self {
        Self {
            chars: &["✻", "✦", "✧", "✶"],
            frame_interval: Duration::from_millis(120),
            start_time: Instant::now(),
        }
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Get current spinner character
    pub fn current_char(&self) -> &'static str {
        self.char_at(self.start_time.elapsed())
    }

    fn char_at(&self, elapsed: Duration) -> &'static str {
        let index = (elapsed.as_millis() / self.frame_interval.as_millis().max(1)) as usize;
        self.chars[index % self.chars.len()]
    }
}

impl Default for SpinnerAnimation {
    fn default() -> Self {
        Self::new()
    }
}

/// Looping playback position for a Lottie animation
#[derive(Debug, Clone)]
pub struct FramePlayer {
    frames: u64,
    interval: Duration,
    start_time: Instant,
}

impl FramePlayer {
    /// Player for the frame range and rate described by `summary`
    pub fn new(summary: &LottieSummary) -> Self {
        Self {
            frames: summary.frame_count().unwrap_or(0).max(1),
            interval: summary.frame_interval(),
            start_time: Instant::now(),
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// How often the widget should redraw
    pub fn redraw_interval(&self) -> Duration {
        self.interval.max(MIN_FRAME_INTERVAL)
    }

    /// Current frame index in `0..frames`
    pub fn current_frame(&self) -> u64 {
        self.frame_at(self.start_time.elapsed())
    }

    fn frame_at(&self, elapsed: Duration) -> u64 {
        let step = self.interval.as_micros().max(1);
        ((elapsed.as_micros() / step) as u64) % self.frames
    }

    /// Playback progress bar `width` cells wide
    pub fn progress_bar(&self, width: usize) -> String {
        Self::bar(self.current_frame(), self.frames, width)
    }

    fn bar(frame: u64, frames: u64, width: usize) -> String {
        let filled = if frames <= 1 {
            width
        } else {
            ((frame as usize + 1) * width) / frames as usize
        };
        format!("{}{}", "▰".repeat(filled), "▱".repeat(width - filled.min(width)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn summary(frame_rate: Option<f64>, out_point: Option<f64>) -> LottieSummary {
        LottieSummary {
            frame_rate,
            in_point: Some(0.0),
            out_point,
            ..LottieSummary::default()
        }
    }

    #[test]
    fn test_spinner_animation() {
        let spinner = SpinnerAnimation::new();
        assert!(["✻", "✦", "✧", "✶"].contains(&spinner.current_char()));
        assert_eq!(spinner.char_at(Duration::ZERO), "✻");
        assert_eq!(spinner.char_at(Duration::from_millis(130)), "✦");
        assert_eq!(spinner.char_at(Duration::from_millis(480)), "✻");
    }

    #[test]
    fn test_frame_player_loops() {
        let player = FramePlayer::new(&summary(Some(10.0), Some(20.0)));
        assert_eq!(player.frames(), 20);
        assert_eq!(player.frame_at(Duration::ZERO), 0);
        assert_eq!(player.frame_at(Duration::from_millis(550)), 5);
        assert_eq!(player.frame_at(Duration::from_millis(2050)), 0);
        assert_eq!(player.redraw_interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_frame_player_without_timing() {
        let player = FramePlayer::new(&LottieSummary::default());
        assert_eq!(player.frames(), 1);
        assert_eq!(player.current_frame(), 0);
        assert_eq!(player.redraw_interval(), MIN_FRAME_INTERVAL);
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(FramePlayer::bar(0, 4, 8), "▰▰▱▱▱▱▱▱");
        assert_eq!(FramePlayer::bar(3, 4, 8), "▰▰▰▰▰▰▰▰");
        assert_eq!(FramePlayer::bar(0, 1, 3), "▰▰▰");
    }
}
