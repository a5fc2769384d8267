//! # Mascot
//!
//! The kitten that hops from syllable to syllable on the reading screen.
//!
//! ```text
//!          🐱              t = 0.5: highest point
//!      🐱      🐱
//!   КО  -  ТЕ  -  НОК
//! ```
//!
//! Pure animation math: callers pass `now` explicitly, so tests can drive
//! the clock. The first placement snaps without a hop.

use std::f32::consts::PI;
use std::time::{Duration, Instant};

/// How long one hop takes.
pub const HOP_DURATION: Duration = Duration::from_millis(400);

/// Rows of lift for a hop of zero distance.
const BASE_JUMP: f32 = 1.0;
/// Extra lift per column travelled.
const JUMP_PER_COLUMN: f32 = 0.05;
/// Highest possible lift, in rows.
pub const MAX_JUMP: f32 = 2.0;

/// Where to draw the mascot this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MascotPose {
    /// Horizontal position in columns (text coordinates, not screen).
    pub x: f32,
    /// Rows above the resting line.
    pub lift: f32,
}

#[derive(Debug, Clone, Default)]
struct Hop {
    from: f32,
    to: f32,
    jump: f32,
    started: Option<Instant>,
}

#[derive(Debug, Clone, Default)]
pub struct Mascot {
    hop: Hop,
    placed: bool,
}

/// Cubic ease-in-out on `t` in `[0, 1]`.
fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

impl Mascot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a hop from wherever the mascot is now towards `x`.
    pub fn move_to(&mut self, x: f32, now: Instant) {
        if !self.placed {
            self.placed = true;
            self.hop = Hop {
                from: x,
                to: x,
                jump: 0.0,
                started: None,
            };
            return;
        }
        if (self.hop.to - x).abs() < f32::EPSILON {
            return;
        }

        let from = self.position(now).x;
        let distance = (x - from).abs();
        self.hop = Hop {
            from,
            to: x,
            jump: (BASE_JUMP + distance * JUMP_PER_COLUMN).min(MAX_JUMP),
            started: Some(now),
        };
    }

    fn progress(&self, now: Instant) -> f32 {
        match self.hop.started {
            Some(started) => {
                let elapsed = now.saturating_duration_since(started);
                (elapsed.as_secs_f32() / HOP_DURATION.as_secs_f32()).min(1.0)
            }
            None => 1.0,
        }
    }

    pub fn position(&self, now: Instant) -> MascotPose {
        let t = self.progress(now);
        let eased = ease_in_out_cubic(t);
        MascotPose {
            x: self.hop.from + (self.hop.to - self.hop.from) * eased,
            lift: self.hop.jump * (PI * t).sin().max(0.0),
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
    }
}
