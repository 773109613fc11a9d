//! Scripted interaction playback
//!
//! A script is a YAML list of steps replayed against one `SideReveal` and a
//! `Presenter`. Each step produces reports: `will_reveal` notifications as they
//! fire, and sampled frames.
//!
//! ```yaml
//! viewport: { width: 375, height: 667 }
//! config:
//!   reveal_width: 250
//! steps:
//!   - op: swipe
//!     from: 5
//!     to: 180
//!   - op: wait
//!     ms: 700
//!   - op: tap
//!     x: 300
//!     y: 100
//! ```

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::commands::Cmd;
use crate::controller::SideReveal;
use crate::gesture::{TouchPhase, TouchSample};
use crate::layout::{HitTarget, Viewport};
use crate::messages::{ConfigMsg, Msg};
use crate::model::ContentId;
use crate::runtime::Presenter;

fn default_viewport() -> Viewport {
    Viewport::new(375.0, 667.0)
}

fn default_true() -> bool {
    true
}

fn default_swipe_samples() -> u32 {
    8
}

#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default)]
    pub config: ConfigPatch,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read script {}: {}", path.display(), e))?;
        Self::from_yaml(&content)
            .map_err(|e| format!("Failed to parse script {}: {}", path.display(), e))
    }
}

/// Partial configuration; unset fields are left alone
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigPatch {
    pub reveal_width: Option<f32>,
    pub reveal_duration: Option<f32>,
    pub reveal_damping: Option<f32>,
    pub overlay_color: Option<Color>,
    pub overlay_alpha: Option<f32>,
    pub swipe_enabled: Option<bool>,
    pub swipe_start_zone_fraction: Option<f32>,
}

impl ConfigPatch {
    pub fn to_messages(&self) -> Vec<ConfigMsg> {
        let mut msgs = Vec::new();
        if let Some(v) = self.reveal_width {
            msgs.push(ConfigMsg::SetRevealWidth(v));
        }
        if let Some(v) = self.reveal_duration {
            msgs.push(ConfigMsg::SetRevealDuration(v));
        }
        if let Some(v) = self.reveal_damping {
            msgs.push(ConfigMsg::SetRevealDamping(v));
        }
        if let Some(v) = self.overlay_color {
            msgs.push(ConfigMsg::SetOverlayColor(v));
        }
        if let Some(v) = self.overlay_alpha {
            msgs.push(ConfigMsg::SetOverlayAlpha(v));
        }
        if let Some(v) = self.swipe_enabled {
            msgs.push(ConfigMsg::SetRevealOnSwipe(v));
        }
        if let Some(v) = self.swipe_start_zone_fraction {
            msgs.push(ConfigMsg::SetSwipeStartZoneFraction(v));
        }
        msgs
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Toggle,
    Reveal {
        reveal: bool,
        #[serde(default = "default_true")]
        animated: bool,
    },
    /// A single raw pointer sample
    Touch { phase: TouchPhase, x: f32 },
    /// Evenly spaced moves from `from` to `to`, then a release at `to`
    Swipe {
        from: f32,
        to: f32,
        #[serde(default = "default_swipe_samples")]
        samples: u32,
        #[serde(default = "default_true")]
        release: bool,
    },
    /// Tap at a point; reaches the overlay only if it is on top there
    Tap { x: f32, y: f32 },
    TapOverlay,
    Resize { width: f32, height: f32 },
    Wait { ms: u64 },
    Set(ConfigPatch),
    Front { id: Option<String> },
    Side { id: Option<String> },
}

/// One line of playback output
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Report {
    WillReveal {
        t_ms: u64,
        reveal: bool,
        animated: bool,
    },
    Frame {
        t_ms: u64,
        offset: f32,
        overlay_alpha: f32,
        revealed: bool,
        dragging: bool,
        animating: bool,
    },
}

type Notifications = Rc<RefCell<Vec<(bool, bool)>>>;

/// Drives a `SideReveal` and `Presenter` through script steps
pub struct Playback {
    reveal: SideReveal,
    presenter: Presenter,
    frame_interval: Duration,
    clock: Duration,
    notifications: Notifications,
}

impl Playback {
    /// Take ownership of the component and record its reveal notifications
    pub fn new(mut reveal: SideReveal, frame_interval: Duration) -> Self {
        let notifications: Notifications = Rc::default();
        let sink = notifications.clone();
        reveal.set_delegate(move |reveal: bool, animated: bool| {
            sink.borrow_mut().push((reveal, animated))
        });
        Self {
            reveal,
            presenter: Presenter::new(),
            frame_interval,
            clock: Duration::ZERO,
            notifications,
        }
    }

    pub fn reveal(&self) -> &SideReveal {
        &self.reveal
    }

    pub fn presenter(&self) -> &Presenter {
        &self.presenter
    }

    pub fn elapsed(&self) -> Duration {
        self.clock
    }

    /// Apply the script's viewport and config, then run every step
    pub fn run(&mut self, script: &Script, mut on_report: impl FnMut(&Report)) {
        self.send(
            Msg::Resize {
                width: script.viewport.width,
                height: script.viewport.height,
            },
            &mut on_report,
        );
        for msg in script.config.to_messages() {
            self.send(Msg::Config(msg), &mut on_report);
        }
        self.presenter.take_redraw();

        for step in &script.steps {
            self.run_step(step, &mut on_report);
        }
    }

    pub fn run_step(&mut self, step: &Step, on_report: &mut impl FnMut(&Report)) {
        tracing::debug!(target: "script", ?step, t_ms = self.clock.as_millis() as u64, "step");
        match step {
            Step::Toggle => {
                let cmd = self.reveal.toggle_reveal();
                self.execute(cmd, on_report);
                self.emit_frame(on_report);
            }
            Step::Reveal { reveal, animated } => {
                let cmd = self.reveal.reveal_side(*reveal, *animated);
                self.execute(cmd, on_report);
                self.emit_frame(on_report);
            }
            Step::Touch { phase, x } => {
                self.touch(TouchSample { phase: *phase, x: *x }, on_report);
            }
            Step::Swipe {
                from,
                to,
                samples,
                release,
            } => {
                let count = (*samples).max(1);
                for i in 0..=count {
                    let x = from + (to - from) * (i as f32 / count as f32);
                    self.touch(TouchSample::moved(x), on_report);
                }
                if *release {
                    self.touch(TouchSample::ended(*to), on_report);
                }
            }
            Step::Tap { x, y } => {
                match self.reveal.hit_test(*x, *y) {
                    HitTarget::Overlay => {
                        let cmd = self.reveal.tap_overlay();
                        self.execute(cmd, on_report);
                    }
                    target => {
                        tracing::debug!(target: "script", ?target, "tap passed through to content");
                    }
                }
                self.emit_frame(on_report);
            }
            Step::TapOverlay => {
                let cmd = self.reveal.tap_overlay();
                self.execute(cmd, on_report);
                self.emit_frame(on_report);
            }
            Step::Resize { width, height } => {
                let cmd = self.reveal.resize(*width, *height);
                self.execute(cmd, on_report);
            }
            Step::Wait { ms } => {
                let until = self.clock + Duration::from_millis(*ms);
                while self.clock < until {
                    let dt = self.frame_interval.min(until - self.clock);
                    self.tick(dt);
                    self.emit_frame(on_report);
                }
            }
            Step::Set(patch) => {
                for msg in patch.to_messages() {
                    self.send(Msg::Config(msg), on_report);
                }
            }
            Step::Front { id } => {
                let cmd = self.reveal.set_front_content(id.as_deref().map(ContentId::from));
                self.execute(cmd, on_report);
            }
            Step::Side { id } => {
                let cmd = self.reveal.set_side_content(id.as_deref().map(ContentId::from));
                self.execute(cmd, on_report);
            }
        }
    }

    fn touch(&mut self, sample: TouchSample, on_report: &mut impl FnMut(&Report)) {
        let cmd = self.reveal.handle_touch(sample);
        self.execute(cmd, on_report);
        self.tick(self.frame_interval);
        self.emit_frame(on_report);
    }

    fn send(&mut self, msg: Msg, on_report: &mut impl FnMut(&Report)) {
        let cmd = self.reveal.dispatch(msg);
        self.execute(cmd, on_report);
    }

    fn execute(&mut self, cmd: Option<Cmd>, on_report: &mut impl FnMut(&Report)) {
        let t_ms = self.clock.as_millis() as u64;
        for (reveal, animated) in self.notifications.borrow_mut().drain(..) {
            on_report(&Report::WillReveal {
                t_ms,
                reveal,
                animated,
            });
        }
        if let Some(cmd) = cmd {
            self.presenter.execute(cmd);
        }
    }

    fn tick(&mut self, dt: Duration) {
        self.presenter.advance(dt);
        self.clock += dt;
    }

    fn emit_frame(&mut self, on_report: &mut impl FnMut(&Report)) {
        self.presenter.take_redraw();
        let frame = self.presenter.presented();
        on_report(&Report::Frame {
            t_ms: self.clock.as_millis() as u64,
            offset: frame.offset,
            overlay_alpha: frame.overlay_alpha,
            revealed: self.reveal.is_revealed(),
            dragging: self.reveal.is_dragging(),
            animating: frame.animating,
        });
    }
}
