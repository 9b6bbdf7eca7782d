use bitflags::bitflags;
use thiserror::Error;

use crate::sys::geometry::Point;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CONTROL = 1 << 1;
        const OPTION = 1 << 2;
        const COMMAND = 1 << 3;
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown modifier {0:?}")]
pub struct ParseModifiersError(String);

impl Modifiers {
    /// Parses `none` or a `+`/`,` separated list such as `option+shift`.
    pub fn parse_list(s: &str) -> Result<Modifiers, ParseModifiersError> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("none") || s.is_empty() {
            return Ok(Modifiers::empty());
        }
        s.split(['+', ','])
            .map(str::trim)
            .try_fold(Modifiers::empty(), |acc, part| {
                let flag = match part.to_ascii_lowercase().as_str() {
                    "shift" => Modifiers::SHIFT,
                    "control" | "ctrl" => Modifiers::CONTROL,
                    "option" | "alt" | "opt" => Modifiers::OPTION,
                    "command" | "cmd" => Modifiers::COMMAND,
                    _ => return Err(ParseModifiersError(part.to_string())),
                };
                Ok(acc | flag)
            })
    }
}

/// Raw input as delivered by an event source, in temporal order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    ModifiersChanged(Modifiers),
    MouseDown(Point),
    MouseDragged(Point),
    MouseUp(Point),
}
