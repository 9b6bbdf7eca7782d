//! State of the direction wheel on every connected screen.
//!
//! Visibility and the highlighted segment are mirrored across all screens;
//! the wheel itself is only centred on the screen the pointer is on.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::model::direction::Direction;
use crate::sys::geometry::{Point, Rect};
use crate::sys::screen::{ScreenDescriptor, ScreenId, screen_containing};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayScreen {
    pub screen: ScreenId,
    /// 1-based label shown in the corner of the overlay.
    pub number: usize,
    pub frame: Rect,
    pub visible: bool,
    pub center: Option<Point>,
    pub selection: Option<Direction>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct OverlayState {
    displays: Vec<ScreenDescriptor>,
    screens: Vec<OverlayScreen>,
    visible: bool,
    selection: Option<Direction>,
}

impl OverlayState {
    pub fn new() -> Self { Self::default() }

    pub fn screens(&self) -> &[OverlayScreen] { &self.screens }

    pub fn is_visible(&self) -> bool { self.visible }

    pub fn selection(&self) -> Option<Direction> { self.selection }

    /// Rebuilds the per-screen entries. Visibility and selection carry over;
    /// a centre survives only if its screen is still present.
    pub fn set_screens(&mut self, screens: &[ScreenDescriptor]) {
        let previous = std::mem::take(&mut self.screens);
        self.screens = screens
            .iter()
            .enumerate()
            .map(|(idx, descriptor)| {
                let center = previous
                    .iter()
                    .find(|s| s.screen == descriptor.id)
                    .and_then(|s| s.center)
                    .filter(|c| descriptor.frame.contains(*c));
                OverlayScreen {
                    screen: descriptor.id,
                    number: idx + 1,
                    frame: descriptor.frame,
                    visible: self.visible,
                    center,
                    selection: self.selection,
                }
            })
            .collect();
        self.displays = screens.to_vec();
        debug!(count = self.screens.len(), "overlay screens updated");
    }

    pub fn show(&mut self) {
        self.visible = true;
        for screen in &mut self.screens {
            screen.visible = true;
        }
    }

    /// Hides every screen and forgets the wheel position and highlight.
    pub fn hide(&mut self) {
        self.visible = false;
        self.selection = None;
        for screen in &mut self.screens {
            screen.visible = false;
            screen.center = None;
            screen.selection = None;
        }
    }

    pub fn update_selection(&mut self, selection: Option<Direction>) {
        self.selection = selection;
        for screen in &mut self.screens {
            screen.selection = selection;
        }
    }

    /// Centres the wheel at `point` on the screen containing it. Returns
    /// false when no screen contains the point.
    pub fn update_position(&mut self, point: Point) -> bool {
        let Some(display) = screen_containing(&self.displays, point) else {
            trace!(?point, "pointer is not on any known screen");
            return false;
        };
        let Some(screen) = self.screens.iter_mut().find(|s| s.screen == display.id) else {
            return false;
        };
        screen.center = Some(point);
        true
    }
}
