//! Recorded input scripts, one event per line:
//!
//! ```text
//! screens 1 0 0 1440 900; 2 1440 0 1920 1080
//! modifiers option
//! down 100 100
//! drag 140 100
//! up 180 100
//! modifiers none
//! ```
//!
//! `#` starts a comment.

use std::io::BufRead;

use thiserror::Error;

use crate::actor::switcher::Event;
use crate::sys::event::{InputEvent, Modifiers};
use crate::sys::geometry::{Point, Rect};
use crate::sys::screen::ScreenDescriptor;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },
    #[error("could not read script")]
    Io(#[from] std::io::Error),
}

pub fn parse_script(reader: impl BufRead) -> Result<Vec<Event>, ScriptError> {
    let mut events = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(event) = parse_line(&line).map_err(|message| ScriptError::Syntax {
            line: idx + 1,
            message,
        })? {
            events.push(event);
        }
    }
    Ok(events)
}

pub fn parse_str(script: &str) -> Result<Vec<Event>, ScriptError> { parse_script(script.as_bytes()) }

fn parse_line(line: &str) -> Result<Option<Event>, String> {
    let line = line.split('#').next().unwrap_or_default().trim();
    let Some((keyword, rest)) = split_keyword(line) else {
        return Ok(None);
    };
    let event = match keyword {
        "modifiers" => {
            let modifiers = Modifiers::parse_list(rest).map_err(|e| e.to_string())?;
            Event::Input(InputEvent::ModifiersChanged(modifiers))
        }
        "down" => Event::Input(InputEvent::MouseDown(parse_point(rest)?)),
        "drag" => Event::Input(InputEvent::MouseDragged(parse_point(rest)?)),
        "up" => Event::Input(InputEvent::MouseUp(parse_point(rest)?)),
        "screens" => Event::ScreensChanged(
            rest.split(';')
                .filter(|s| !s.trim().is_empty())
                .map(parse_screen)
                .collect::<Result<_, _>>()?,
        ),
        other => return Err(format!("unknown event {other:?}")),
    };
    Ok(Some(event))
}

fn split_keyword(line: &str) -> Option<(&str, &str)> {
    if line.is_empty() {
        return None;
    }
    Some(match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    })
}

fn parse_numbers<const N: usize>(text: &str) -> Result<[f64; N], String> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    if parts.len() != N {
        return Err(format!("expected {N} numbers, got {:?}", text));
    }
    let mut numbers = [0.0; N];
    for (slot, part) in numbers.iter_mut().zip(parts) {
        *slot = part.parse().map_err(|_| format!("invalid number {part:?}"))?;
    }
    Ok(numbers)
}

fn parse_point(text: &str) -> Result<Point, String> {
    let [x, y] = parse_numbers::<2>(text)?;
    Ok(Point::new(x, y))
}

fn parse_screen(text: &str) -> Result<ScreenDescriptor, String> {
    let [id, x, y, width, height] = parse_numbers::<5>(text)?;
    if id < 0.0 || id.fract() != 0.0 || id > u32::MAX as f64 {
        return Err(format!("invalid screen id {id}"));
    }
    Ok(ScreenDescriptor::new(id as u32, Rect::new(x, y, width, height)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_script() {
        let events = parse_str(
            "# two monitors\n\
             screens 1 0 0 1440 900; 2 1440 0 1920 1080\n\
             \n\
             modifiers option+shift\n\
             down 100 100   # anchor\n\
             drag 120.5 -3\n\
             up 180 100\n\
             modifiers none\n",
        )
        .unwrap();

        assert_eq!(events.len(), 6);
        match &events[0] {
            Event::ScreensChanged(screens) => {
                assert_eq!(screens.len(), 2);
                assert_eq!(
                    screens[1],
                    ScreenDescriptor::new(2, Rect::new(1440.0, 0.0, 1920.0, 1080.0))
                );
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            events[1],
            Event::Input(InputEvent::ModifiersChanged(m)) if m == Modifiers::OPTION | Modifiers::SHIFT
        ));
        assert!(matches!(
            events[3],
            Event::Input(InputEvent::MouseDragged(p)) if p == Point::new(120.5, -3.0)
        ));
        assert!(matches!(
            events[5],
            Event::Input(InputEvent::ModifiersChanged(m)) if m.is_empty()
        ));
    }

    #[test]
    fn reports_the_failing_line() {
        let err = parse_str("modifiers option\ndown 1\n").unwrap_err();
        match err {
            ScriptError::Syntax { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("expected 2 numbers"), "{message}");
            }
            other => panic!("unexpected {other:?}"),
        }

        assert!(matches!(parse_str("jump 1 2"), Err(ScriptError::Syntax { line: 1, .. })));
        assert!(matches!(parse_str("up x 2"), Err(ScriptError::Syntax { line: 1, .. })));
        assert!(matches!(
            parse_str("screens 1.5 0 0 10 10"),
            Err(ScriptError::Syntax { line: 1, .. })
        ));
    }
}
