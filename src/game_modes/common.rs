//! Helpers shared by the game mode loops.

use std::time::{Duration, Instant};

/// Frame duration for a configured frames-per-second target. One physics
/// tick runs per frame, so this also sets the tick length.
pub fn frame_duration(target_fps: u64) -> Duration {
    Duration::from_millis(1000 / target_fps.max(1))
}

/// Sleep out the remainder of the frame so every loop iteration takes the
/// same wall-clock time. Call at the end of each game loop iteration with
/// the `Instant` captured at its start.
pub fn limit_frame_rate(frame_start: Instant, frame: Duration) {
    let elapsed = frame_start.elapsed();
    if elapsed < frame {
        std::thread::sleep(frame - elapsed);
    }
}
