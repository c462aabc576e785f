//! Tick-driven property animation.
//!
//! [`Tween`] interpolates a set of numeric properties from start to end
//! values over a fixed duration, one frame per tick message. The owning
//! widget starts a transition, returns the produced command to the runtime,
//! and feeds incoming [`FrameMsg`]s back into [`Tween::update`]. Frames carry
//! the tween's id and a sequence tag, so starting a new transition silently
//! cancels one still in flight: stale frames are dropped and the last request
//! wins.

use bubbletea_rs::{tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Frames per second for running transitions.
pub const FPS: u32 = 60;

/// Default transition length.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(200);

/// Message advancing a running transition by one frame.
#[derive(Debug, Clone)]
pub struct FrameMsg {
    id: i64,
    tag: i64,
}

/// Easing curve applied to a transition's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Constant rate.
    Linear,
    /// Cubic acceleration from rest.
    In,
    /// Cubic deceleration to rest.
    Out,
    /// Cubic acceleration then deceleration.
    InOut,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` onto the curve.
    pub fn eval(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::In => t * t * t,
            Easing::Out => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Easing::InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

/// A (start, end) pair for one animated property.
#[derive(Debug, Clone, Copy)]
pub struct Interpolation {
    /// Value at progress 0.
    pub from: f64,
    /// Value at progress 1.
    pub to: f64,
}

impl Interpolation {
    /// Creates an interpolation between two values.
    pub fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// The value at eased progress `t`.
    pub fn at(&self, t: f64) -> f64 {
        self.from + (self.to - self.from) * t
    }
}

/// Animates a set of properties together over a fixed duration.
#[derive(Debug, Clone)]
pub struct Tween {
    id: i64,
    tag: i64,
    props: Vec<Interpolation>,
    easing: Easing,
    duration: Duration,
    frame: u32,
    total_frames: u32,
    running: bool,
}

impl Default for Tween {
    fn default() -> Self {
        Self::new()
    }
}

impl Tween {
    /// Creates an idle tween with the default duration.
    pub fn new() -> Self {
        Self {
            id: next_id(),
            tag: 0,
            props: Vec::new(),
            easing: Easing::Out,
            duration: DEFAULT_DURATION,
            frame: 0,
            total_frames: 0,
            running: false,
        }
    }

    /// Overrides the transition length.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Starts a transition over the given properties, cancelling any
    /// transition still in flight. Returns the command that schedules the
    /// first frame; the transition only advances if the command's messages
    /// are fed back into [`Tween::update`].
    pub fn start(&mut self, props: Vec<Interpolation>, easing: Easing) -> Cmd {
        self.props = props;
        self.easing = easing;
        self.frame = 0;
        self.total_frames = ((self.duration.as_secs_f64() * FPS as f64).round() as u32).max(1);
        self.running = true;
        self.tag += 1;
        self.next_frame()
    }

    /// Handles a frame message. Returns `None` when the message is not a
    /// current frame for this tween; `Some(Some(cmd))` while the transition
    /// continues; `Some(None)` on the final frame.
    pub fn update(&mut self, msg: &Msg) -> Option<Option<Cmd>> {
        let frame = msg.downcast_ref::<FrameMsg>()?;
        if frame.id != self.id || frame.tag != self.tag || !self.running {
            return None;
        }

        self.frame += 1;
        if self.frame >= self.total_frames {
            self.frame = self.total_frames;
            self.running = false;
            return Some(None);
        }
        Some(Some(self.next_frame()))
    }

    /// Current eased values of the animated properties, in the order they
    /// were passed to [`Tween::start`].
    pub fn values(&self) -> Vec<f64> {
        let t = if self.total_frames == 0 {
            1.0
        } else {
            self.easing.eval(self.frame as f64 / self.total_frames as f64)
        };
        self.props.iter().map(|p| p.at(t)).collect()
    }

    /// Whether a transition is in flight.
    pub fn is_animating(&self) -> bool {
        self.running
    }

    fn next_frame(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        let delay = Duration::from_nanos(1_000_000_000 / FPS as u64);
        tick(delay, move |_| Box::new(FrameMsg { id, tag }) as Msg)
    }

    #[cfg(test)]
    pub(crate) fn test_frame(&self) -> FrameMsg {
        FrameMsg {
            id: self.id,
            tag: self.tag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::In, Easing::Out, Easing::InOut] {
            assert!((easing.eval(0.0)).abs() < 1e-9);
            assert!((easing.eval(1.0) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_ease_out_front_loads_progress() {
        // Deceleration curve: more than half the distance covered at t=0.5.
        assert!(Easing::Out.eval(0.5) > 0.5);
        assert!(Easing::In.eval(0.5) < 0.5);
    }

    #[test]
    fn test_interpolation_midpoint() {
        let i = Interpolation::new(16.0, 12.0);
        assert_eq!(i.at(0.0), 16.0);
        assert_eq!(i.at(1.0), 12.0);
        assert_eq!(i.at(0.5), 14.0);
    }

    #[test]
    fn test_tween_runs_to_endpoints() {
        let mut tween = Tween::new();
        tween.set_duration(Duration::from_millis(50));
        let _cmd = tween.start(
            vec![Interpolation::new(22.0, 0.0), Interpolation::new(16.0, 12.0)],
            Easing::Out,
        );
        assert!(tween.is_animating());

        let mut steps = 0;
        while tween.is_animating() {
            let frame = Box::new(tween.test_frame()) as Msg;
            let stepped = tween.update(&frame);
            assert!(stepped.is_some(), "current frame must be accepted");
            steps += 1;
            assert!(steps <= 10_000, "transition must terminate");
        }

        let values = tween.values();
        assert!((values[0] - 0.0).abs() < 1e-9);
        assert!((values[1] - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_stale_frames_are_dropped() {
        let mut tween = Tween::new();
        let _first = tween.start(vec![Interpolation::new(0.0, 1.0)], Easing::Linear);
        let stale = Box::new(tween.test_frame()) as Msg;

        // Restarting bumps the tag; the old frame must no longer advance it.
        let _second = tween.start(vec![Interpolation::new(0.0, 2.0)], Easing::Linear);
        assert!(tween.update(&stale).is_none());
        assert_eq!(tween.frame, 0);
    }

    #[test]
    fn test_foreign_messages_are_ignored() {
        let mut tween = Tween::new();
        let _ = tween.start(vec![Interpolation::new(0.0, 1.0)], Easing::Linear);
        let other = Box::new("not a frame".to_string()) as Msg;
        assert!(tween.update(&other).is_none());
    }
}
