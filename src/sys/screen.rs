use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::sys::geometry::{Point, Rect};

#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreenId(u32);

impl ScreenId {
    pub fn new(id: u32) -> Self { ScreenId(id) }

    pub fn as_u32(&self) -> u32 { self.0 }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenDescriptor {
    pub id: ScreenId,
    pub frame: Rect,
}

impl ScreenDescriptor {
    pub fn new(id: u32, frame: Rect) -> Self {
        Self {
            id: ScreenId::new(id),
            frame,
        }
    }
}

/// Puts the main screen (the one whose origin is at zero) first and the
/// remaining screens left-to-right, then bottom-to-top. Duplicate ids keep
/// their first occurrence.
pub fn arrange_screens(screens: impl IntoIterator<Item = ScreenDescriptor>) -> Vec<ScreenDescriptor> {
    let mut arranged: Vec<ScreenDescriptor> = Vec::new();
    for screen in screens {
        if arranged.iter().any(|s| s.id == screen.id) {
            warn!("Ignoring duplicate screen {:?}", screen.id);
            continue;
        }
        arranged.push(screen);
    }

    arranged.sort_by(|a, b| {
        let a_main = a.frame.origin == Point::ZERO;
        let b_main = b.frame.origin == Point::ZERO;
        b_main.cmp(&a_main).then_with(|| {
            let x_order = a.frame.origin.x.total_cmp(&b.frame.origin.x);
            if x_order == Ordering::Equal {
                a.frame.origin.y.total_cmp(&b.frame.origin.y)
            } else {
                x_order
            }
        })
    });
    arranged
}

pub fn screen_containing(screens: &[ScreenDescriptor], point: Point) -> Option<&ScreenDescriptor> {
    screens.iter().find(|s| s.frame.contains(point))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ids(screens: &[ScreenDescriptor]) -> Vec<u32> { screens.iter().map(|s| s.id.as_u32()).collect() }

    #[test]
    fn main_screen_comes_first() {
        let screens = arrange_screens(vec![
            ScreenDescriptor::new(3, Rect::new(-1920.0, 0.0, 1920.0, 1080.0)),
            ScreenDescriptor::new(1, Rect::new(1440.0, 0.0, 1512.0, 982.0)),
            ScreenDescriptor::new(2, Rect::new(0.0, 0.0, 1440.0, 900.0)),
        ]);
        assert_eq!(ids(&screens), vec![2, 3, 1]);
    }

    #[test]
    fn orders_by_vertical_position_when_aligned() {
        let screens = arrange_screens(vec![
            ScreenDescriptor::new(10, Rect::new(0.0, 900.0, 1440.0, 900.0)),
            ScreenDescriptor::new(11, Rect::new(0.0, -900.0, 1440.0, 900.0)),
        ]);
        assert_eq!(ids(&screens), vec![11, 10]);
    }

    #[test]
    fn drops_duplicate_ids() {
        let screens = arrange_screens(vec![
            ScreenDescriptor::new(1, Rect::new(0.0, 0.0, 1440.0, 900.0)),
            ScreenDescriptor::new(1, Rect::new(1440.0, 0.0, 1440.0, 900.0)),
        ]);
        assert_eq!(screens.len(), 1);
        assert_eq!(screens[0].frame.origin, Point::ZERO);
    }

    #[test]
    fn finds_the_screen_under_the_pointer() {
        let screens = vec![
            ScreenDescriptor::new(1, Rect::new(0.0, 0.0, 1440.0, 900.0)),
            ScreenDescriptor::new(2, Rect::new(1440.0, 0.0, 1920.0, 1080.0)),
        ];
        let hit = |x, y| screen_containing(&screens, Point::new(x, y)).map(|s| s.id.as_u32());
        assert_eq!(hit(100.0, 100.0), Some(1));
        assert_eq!(hit(1440.0, 1000.0), Some(2));
        assert_eq!(hit(100.0, 1000.0), None);
    }
}
