use serde::{Deserialize, Serialize};

use crate::model::direction::Direction;
use crate::model::mapping::AppMapping;
use crate::ui::overlay::OverlayScreen;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
#[serde(tag = "type")]
pub enum SwitcherEvent {
    Resolved {
        direction: Direction,
        app: Option<AppMapping>,
    },
    Ignored {
        direction: Direction,
        distance: f64,
    },
    Cancelled,
    LaunchFailed {
        direction: Direction,
        bundle_id: String,
        error: String,
    },
    OverlayChanged {
        screens: Vec<OverlayScreen>,
    },
}

impl SwitcherEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SwitcherEvent::Resolved { .. } => "resolved",
            SwitcherEvent::Ignored { .. } => "ignored",
            SwitcherEvent::Cancelled => "cancelled",
            SwitcherEvent::LaunchFailed { .. } => "launch_failed",
            SwitcherEvent::OverlayChanged { .. } => "overlay_changed",
        }
    }
}

pub type BroadcastSender = crate::actor::Sender<SwitcherEvent>;
pub type BroadcastReceiver = crate::actor::Receiver<SwitcherEvent>;
