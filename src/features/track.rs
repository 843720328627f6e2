//! The track shown in the bar and the sheet
//!
//! There is no playback backend; the now-playing entry is static.

use std::time::Duration;

/// Metadata for the current track
#[derive(Debug, Clone, PartialEq)]
pub struct NowPlaying {
    pub title: String,
    pub artist: String,
    pub position: Duration,
    pub duration: Duration,
}

impl Default for NowPlaying {
    fn default() -> Self {
        Self {
            title: "Look What You Made Me do".to_string(),
            artist: "Taylor Swift".to_string(),
            position: Duration::ZERO,
            duration: Duration::from_secs(213),
        }
    }
}

impl NowPlaying {
    /// Fraction of the track already played, in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        (self.position.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Format a duration as `m:ss`
pub fn format_time(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_time(Duration::ZERO), "0:00");
        assert_eq!(format_time(Duration::from_secs(213)), "3:33");
        assert_eq!(format_time(Duration::from_millis(59_999)), "0:59");
        assert_eq!(format_time(Duration::from_secs(3600)), "60:00");
    }

    #[test]
    fn progress_is_bounded() {
        let mut track = NowPlaying::default();
        assert_eq!(track.progress(), 0.0);
        track.position = Duration::from_secs(1000);
        assert_eq!(track.progress(), 1.0);
        track.duration = Duration::ZERO;
        assert_eq!(track.progress(), 0.0);
    }
}
