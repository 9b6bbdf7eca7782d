use tracing::{debug, info, instrument, trace, warn};

use crate::actor;
use crate::actor::broadcast::{BroadcastSender, SwitcherEvent};
use crate::common::config::Config;
use crate::model::direction::Direction;
use crate::model::gesture::{GestureEvent, GestureState, GestureTracker};
use crate::model::mapping::MappingStore;
use crate::sys::event::InputEvent;
use crate::sys::geometry::Point;
use crate::sys::launcher::AppLauncher;
use crate::sys::screen::{ScreenDescriptor, arrange_screens};
use crate::ui::overlay::OverlayState;

#[derive(Debug)]
pub enum Event {
    Input(InputEvent),
    ScreensChanged(Vec<ScreenDescriptor>),
    ConfigUpdated(Config),
}

pub type Sender = actor::Sender<Event>;
pub type Receiver = actor::Receiver<Event>;

pub struct Switcher {
    config: Config,
    rx: Receiver,
    launcher: Box<dyn AppLauncher>,
    tracker: GestureTracker,
    overlay: OverlayState,
    events_tx: Option<BroadcastSender>,
}

impl Switcher {
    pub fn new(config: Config, rx: Receiver, launcher: Box<dyn AppLauncher>) -> Self {
        Self {
            config,
            rx,
            launcher,
            tracker: GestureTracker::new(),
            overlay: OverlayState::new(),
            events_tx: None,
        }
    }

    pub fn with_broadcast(mut self, events_tx: BroadcastSender) -> Self {
        self.events_tx = Some(events_tx);
        self
    }

    pub fn gesture_state(&self) -> GestureState { self.tracker.state() }

    pub fn overlay(&self) -> &OverlayState { &self.overlay }

    pub async fn run(mut self) {
        while let Some((span, event)) = self.rx.recv().await {
            let _guard = span.enter();
            self.handle_event(event);
        }
        debug!("switcher input closed");
    }

    fn overlay_enabled(&self) -> bool { self.config.settings.overlay.enabled }

    #[instrument(name = "switcher::handle_event", skip(self))]
    pub fn handle_event(&mut self, event: Event) {
        let overlay_before = self.overlay.clone();
        match event {
            Event::Input(input) => self.handle_input(input),
            Event::ScreensChanged(screens) => {
                let screens = arrange_screens(screens);
                self.overlay.set_screens(&screens);
            }
            Event::ConfigUpdated(config) => self.handle_config_updated(config),
        }
        let changed = self.overlay != overlay_before && !self.overlay.screens().is_empty();
        if changed && (self.overlay_enabled() || overlay_before.is_visible()) {
            self.broadcast(SwitcherEvent::OverlayChanged {
                screens: self.overlay.screens().to_vec(),
            });
        }
    }

    fn handle_config_updated(&mut self, config: Config) {
        self.config = config;
        if !self.overlay_enabled() {
            self.overlay.hide();
        } else if self.tracker.is_engaged() && !self.overlay.is_visible() {
            self.overlay.show();
        }
        debug!("config updated");
    }

    fn handle_input(&mut self, input: InputEvent) {
        trace!(?input, "input");
        let gesture = match input {
            InputEvent::ModifiersChanged(modifiers) => {
                if modifiers.contains(self.config.settings.modifier.flag()) {
                    GestureEvent::EngageModifier
                } else {
                    GestureEvent::ReleaseModifier
                }
            }
            InputEvent::MouseDown(point) => GestureEvent::PointerDown(point),
            InputEvent::MouseDragged(point) => GestureEvent::PointerDragged(point),
            InputEvent::MouseUp(point) => GestureEvent::PointerUp(point),
        };
        self.feed(gesture);
    }

    fn feed(&mut self, event: GestureEvent) {
        let before = self.tracker.state();
        let resolved = self.tracker.handle(event);
        let after = self.tracker.state();

        match (before, after, event) {
            (GestureState::Idle, GestureState::Tracking, _) => {
                debug!("gesture engaged");
                if self.overlay_enabled() {
                    self.overlay.show();
                }
            }
            (GestureState::Tracking, GestureState::Dragging { anchor }, _) => {
                if self.overlay_enabled() {
                    self.overlay.update_position(anchor);
                }
            }
            (
                GestureState::Dragging { .. },
                GestureState::Dragging { .. },
                GestureEvent::PointerDragged(point),
            ) => {
                if self.overlay_enabled() {
                    let preview = self.tracker.preview(point);
                    if preview != self.overlay.selection() {
                        trace!(?preview, "preview changed");
                        self.overlay.update_selection(preview);
                    }
                }
            }
            (
                GestureState::Dragging { anchor },
                GestureState::Tracking,
                GestureEvent::PointerUp(point),
            ) => {
                self.overlay.update_selection(None);
                if let Some(direction) = resolved {
                    self.resolve(direction, anchor, point);
                }
            }
            (before, GestureState::Idle, _) if before != GestureState::Idle => {
                if matches!(before, GestureState::Dragging { .. }) {
                    info!("gesture cancelled");
                    self.broadcast(SwitcherEvent::Cancelled);
                } else {
                    debug!("gesture disengaged");
                }
                self.overlay.hide();
            }
            _ => {}
        }
    }

    fn resolve(&mut self, direction: Direction, anchor: Point, release: Point) {
        let distance = release.distance_to(anchor);
        let min_distance = self.config.settings.gesture.min_drag_distance;
        if distance < min_distance {
            debug!(%direction, distance, min_distance, "drag too short, ignoring");
            self.broadcast(SwitcherEvent::Ignored { direction, distance });
            return;
        }

        let Some(app) = self.config.lookup(direction).cloned() else {
            info!(%direction, "no application pinned to direction");
            self.broadcast(SwitcherEvent::Resolved { direction, app: None });
            return;
        };

        info!(%direction, bundle_id = %app.bundle_id, "switching application");
        self.broadcast(SwitcherEvent::Resolved {
            direction,
            app: Some(app.clone()),
        });
        if let Err(err) = self.launcher.activate_or_launch(&app) {
            warn!(%direction, bundle_id = %app.bundle_id, error = %err, "launch failed");
            self.broadcast(SwitcherEvent::LaunchFailed {
                direction,
                bundle_id: app.bundle_id,
                error: err.to_string(),
            });
        }
    }

    fn broadcast(&self, event: SwitcherEvent) {
        trace!(event = event.name(), "broadcast");
        if let Some(tx) = &self.events_tx {
            tx.send(event);
        }
    }
}
