//! Line-based input scripts for driving a session without a window system.
//!
//! ```text
//! # window 0 draws a red diagonal, window 2 wipes the board
//! color 0 red
//! down  0 10 10
//! drag  0 40 40
//! clear 2
//! ```

use crate::draw::Color;
use crate::util::parse_palette_token;
use thiserror::Error;

/// One user input addressed to a view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptEvent {
    /// Pointer pressed at (x, y)
    PointerDown { window: usize, x: i32, y: i32 },
    /// Pointer dragged to (x, y)
    PointerDrag { window: usize, x: i32, y: i32 },
    /// Palette selection
    SelectColor { window: usize, color: Color },
    /// Clear button
    Clear { window: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct ScriptError {
    pub line: usize,
    pub message: String,
}

/// Parses a whole script. Blank lines and `#` comments are skipped.
pub fn parse_script(source: &str) -> Result<Vec<ScriptEvent>, ScriptError> {
    let mut events = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let event = parse_line(line).map_err(|message| ScriptError {
            line: index + 1,
            message,
        })?;
        events.push(event);
    }
    Ok(events)
}

fn parse_line(line: &str) -> Result<ScriptEvent, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (command, args) = tokens
        .split_first()
        .ok_or_else(|| "empty command".to_string())?;

    match command.to_lowercase().as_str() {
        "down" => {
            let [window, x, y] = expect_args::<3>(command, args)?;
            Ok(ScriptEvent::PointerDown {
                window: parse_window(window)?,
                x: parse_coord(x)?,
                y: parse_coord(y)?,
            })
        }
        "drag" => {
            let [window, x, y] = expect_args::<3>(command, args)?;
            Ok(ScriptEvent::PointerDrag {
                window: parse_window(window)?,
                x: parse_coord(x)?,
                y: parse_coord(y)?,
            })
        }
        "color" => {
            let [window, token] = expect_args::<2>(command, args)?;
            let color = parse_palette_token(token)
                .ok_or_else(|| format!("unknown color '{token}'"))?;
            Ok(ScriptEvent::SelectColor {
                window: parse_window(window)?,
                color,
            })
        }
        "clear" => {
            let [window] = expect_args::<1>(command, args)?;
            Ok(ScriptEvent::Clear {
                window: parse_window(window)?,
            })
        }
        other => Err(format!("unknown command '{other}'")),
    }
}

fn expect_args<'a, const N: usize>(
    command: &str,
    args: &[&'a str],
) -> Result<[&'a str; N], String> {
    <[&str; N]>::try_from(args)
        .map_err(|_| format!("'{command}' takes {N} argument(s), got {}", args.len()))
}

fn parse_window(token: &str) -> Result<usize, String> {
    token
        .parse()
        .map_err(|_| format!("invalid window index '{token}'"))
}

fn parse_coord(token: &str) -> Result<i32, String> {
    token
        .parse()
        .map_err(|_| format!("invalid coordinate '{token}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLUE, RED};

    #[test]
    fn parses_every_command() {
        let events = parse_script(
            "# demo\n\
             color 0 red\n\
             down 0 10 10\n\
             \n\
             drag 0 -5 600  # off the board\n\
             color 1 3\n\
             CLEAR 2\n",
        )
        .unwrap();

        assert_eq!(
            events,
            vec![
                ScriptEvent::SelectColor {
                    window: 0,
                    color: RED
                },
                ScriptEvent::PointerDown {
                    window: 0,
                    x: 10,
                    y: 10
                },
                ScriptEvent::PointerDrag {
                    window: 0,
                    x: -5,
                    y: 600
                },
                ScriptEvent::SelectColor {
                    window: 1,
                    color: BLUE
                },
                ScriptEvent::Clear { window: 2 },
            ]
        );
    }

    #[test]
    fn errors_carry_line_numbers() {
        let err = parse_script("down 0 1 1\n\ndrag 0 1\n").unwrap_err();
        assert_eq!(err.line, 3);
        assert!(err.message.contains("takes 3 argument(s), got 2"));

        let err = parse_script("color 0 mauve").unwrap_err();
        assert_eq!(err.to_string(), "line 1: unknown color 'mauve'");

        let err = parse_script("wave 0").unwrap_err();
        assert_eq!(err.message, "unknown command 'wave'");

        let err = parse_script("down -1 1 1").unwrap_err();
        assert_eq!(err.message, "invalid window index '-1'");
    }

    #[test]
    fn empty_script_has_no_events() {
        assert!(parse_script("\n   \n# nothing\n").unwrap().is_empty());
    }
}
