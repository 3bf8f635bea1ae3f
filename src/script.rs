//! Gesture script parsing and replay.
//!
//! Scripts drive the engine without a windowing host: one command per line,
//! `#` starts a comment, blank lines are skipped. A script is parsed in full
//! before any command runs, so a syntax error never leaves a half-replayed
//! canvas behind.
//!
//! ```text
//! tool rect
//! color #FF8800
//! width 3
//! down 10 10
//! move 40 30
//! up
//! export out.png
//! ```

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use crate::draw::{Color, ExportError};
use crate::engine::Engine;
use crate::input::{PointerInput, Tool, TouchPoint};
use crate::util;

/// Stroke widths accepted by the `width` command, matching the range the
/// interactive slider exposes.
pub const WIDTH_RANGE: std::ops::RangeInclusive<u32> = 1..=50;

/// Canvas dimensions accepted by the `resize` command, matching the range
/// the config loader clamps to.
pub const DIMENSION_RANGE: std::ops::RangeInclusive<u32> = 1..=8192;

/// Errors produced while parsing or replaying a gesture script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: {message}")]
    BadArguments { line: usize, message: String },

    #[error("PNG export failed: {0}")]
    Export(#[from] ExportError),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A single parsed script command.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptStep {
    /// Switch the active tool
    Tool(Tool),
    /// Set the stroke color
    Color(Color),
    /// Set the stroke width in pixels
    Width(u32),
    /// Mouse press at client coordinates
    Down { x: f64, y: f64 },
    /// Touch-start with one or more contact points
    Touch { contacts: Vec<TouchPoint> },
    /// Pointer motion at client coordinates
    Move { x: f64, y: f64 },
    /// Pointer release
    Up,
    /// Pointer leaves the canvas
    Leave,
    /// Revert to the previous committed snapshot
    Undo,
    /// Blank the canvas and reset history
    Clear,
    /// Resize the canvas
    Resize { width: u32, height: u32 },
    /// Move the canvas origin within the client area
    Origin { x: i32, y: i32 },
    /// Export the canvas as a PNG file
    Export { path: PathBuf },
}

/// Parses a script into its steps.
///
/// # Arguments
/// * `source` - Full script text
///
/// # Returns
/// The parsed steps in order, or the first error with its line number.
pub fn parse(source: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    let mut steps = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let mut words = text.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let args: Vec<&str> = words.collect();

        let step = match command {
            "tool" => match args.as_slice() {
                [name] => match Tool::from_name(name) {
                    Some(tool) => ScriptStep::Tool(tool),
                    None => {
                        return Err(bad_args(line, format!("unknown tool '{name}'")));
                    }
                },
                _ => return Err(usage(line, "tool NAME")),
            },
            "color" => match args.as_slice() {
                [spec] => match util::parse_color(spec) {
                    Some(color) => ScriptStep::Color(color),
                    None => {
                        return Err(bad_args(line, format!("unknown color '{spec}'")));
                    }
                },
                _ => return Err(usage(line, "color NAME|#RRGGBB")),
            },
            "width" => match args.as_slice() {
                [value] => {
                    let width: u32 = parse_number(line, "width", value)?;
                    if !WIDTH_RANGE.contains(&width) {
                        return Err(bad_args(
                            line,
                            format!(
                                "width {width} out of range {}..={}",
                                WIDTH_RANGE.start(),
                                WIDTH_RANGE.end()
                            ),
                        ));
                    }
                    ScriptStep::Width(width)
                }
                _ => return Err(usage(line, "width N")),
            },
            "down" => match args.as_slice() {
                [x, y] => ScriptStep::Down {
                    x: parse_number(line, "x", x)?,
                    y: parse_number(line, "y", y)?,
                },
                _ => return Err(usage(line, "down X Y")),
            },
            "touch" => {
                if args.is_empty() || args.len() % 2 != 0 {
                    return Err(usage(line, "touch X Y [X Y ...]"));
                }
                let mut contacts = Vec::with_capacity(args.len() / 2);
                for pair in args.chunks(2) {
                    contacts.push(TouchPoint {
                        x: parse_number(line, "x", pair[0])?,
                        y: parse_number(line, "y", pair[1])?,
                    });
                }
                ScriptStep::Touch { contacts }
            }
            "move" => match args.as_slice() {
                [x, y] => ScriptStep::Move {
                    x: parse_number(line, "x", x)?,
                    y: parse_number(line, "y", y)?,
                },
                _ => return Err(usage(line, "move X Y")),
            },
            "up" => match args.as_slice() {
                [] => ScriptStep::Up,
                _ => return Err(usage(line, "up")),
            },
            "leave" => match args.as_slice() {
                [] => ScriptStep::Leave,
                _ => return Err(usage(line, "leave")),
            },
            "undo" => match args.as_slice() {
                [] => ScriptStep::Undo,
                _ => return Err(usage(line, "undo")),
            },
            "clear" => match args.as_slice() {
                [] => ScriptStep::Clear,
                _ => return Err(usage(line, "clear")),
            },
            "resize" => match args.as_slice() {
                [width, height] => {
                    let width: u32 = parse_number(line, "width", width)?;
                    let height: u32 = parse_number(line, "height", height)?;
                    if !DIMENSION_RANGE.contains(&width) || !DIMENSION_RANGE.contains(&height) {
                        return Err(bad_args(
                            line,
                            format!(
                                "resize dimensions out of range {}..={}",
                                DIMENSION_RANGE.start(),
                                DIMENSION_RANGE.end()
                            ),
                        ));
                    }
                    ScriptStep::Resize { width, height }
                }
                _ => return Err(usage(line, "resize W H")),
            },
            "origin" => match args.as_slice() {
                [x, y] => ScriptStep::Origin {
                    x: parse_number(line, "x", x)?,
                    y: parse_number(line, "y", y)?,
                },
                _ => return Err(usage(line, "origin X Y")),
            },
            "export" => match args.as_slice() {
                [path] => ScriptStep::Export {
                    path: PathBuf::from(path),
                },
                _ => return Err(usage(line, "export PATH")),
            },
            _ => {
                return Err(ScriptError::UnknownCommand {
                    line,
                    command: command.to_string(),
                });
            }
        };
        steps.push(step);
    }

    Ok(steps)
}

/// Replays parsed steps against an engine.
///
/// Pointer steps feed the gesture state machine exactly like host events,
/// so replay exercises the same code paths as interactive drawing.
pub fn run(engine: &mut Engine, steps: &[ScriptStep]) -> Result<(), ScriptError> {
    for step in steps {
        match step {
            ScriptStep::Tool(tool) => engine.select_tool(*tool),
            ScriptStep::Color(color) => engine.set_color(*color),
            ScriptStep::Width(width) => engine.set_stroke_width(*width),
            ScriptStep::Down { x, y } => engine.pointer_down(&PointerInput::mouse(*x, *y)),
            ScriptStep::Touch { contacts } => engine.pointer_down(&PointerInput::Touch {
                contacts: contacts.clone(),
            }),
            ScriptStep::Move { x, y } => engine.pointer_move(&PointerInput::mouse(*x, *y)),
            ScriptStep::Up => engine.pointer_up(),
            ScriptStep::Leave => engine.pointer_leave(),
            ScriptStep::Undo => engine.undo(),
            ScriptStep::Clear => engine.clear(),
            ScriptStep::Resize { width, height } => engine.resize(*width, *height),
            ScriptStep::Origin { x, y } => engine.set_client_origin(*x, *y),
            ScriptStep::Export { path } => {
                let bytes = engine.export_png()?;
                fs::write(path, &bytes).map_err(|source| ScriptError::Write {
                    path: path.clone(),
                    source,
                })?;
                log::info!(
                    "Exported {}x{} canvas to {}",
                    engine.canvas().width(),
                    engine.canvas().height(),
                    path.display()
                );
            }
        }
    }
    Ok(())
}

/// Parses and replays a script in one go.
pub fn replay(engine: &mut Engine, source: &str) -> Result<(), ScriptError> {
    let steps = parse(source)?;
    run(engine, &steps)
}

fn parse_number<T: std::str::FromStr>(
    line: usize,
    name: &str,
    value: &str,
) -> Result<T, ScriptError> {
    value
        .parse()
        .map_err(|_| bad_args(line, format!("invalid {name} '{value}'")))
}

fn usage(line: usize, expected: &str) -> ScriptError {
    bad_args(line, format!("expected '{expected}'"))
}

fn bad_args(line: usize, message: String) -> ScriptError {
    ScriptError::BadArguments { line, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, RED, WHITE};

    fn test_engine() -> Engine {
        Engine::new(64, 48, WHITE, BLACK, 5)
    }

    #[test]
    fn parse_skips_comments_and_blank_lines() {
        let steps = parse("# a comment\n\n  \nundo\n").expect("should parse");
        assert_eq!(steps, vec![ScriptStep::Undo]);
    }

    #[test]
    fn parse_reports_the_failing_line() {
        let err = parse("down 1 1\nup\nwiggle\n").unwrap_err();
        match err {
            ScriptError::UnknownCommand { line, command } => {
                assert_eq!(line, 3);
                assert_eq!(command, "wiggle");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_rejects_out_of_range_widths() {
        assert!(parse("width 0").is_err());
        assert!(parse("width 51").is_err());
        assert!(parse("width 50").is_ok());
        assert!(parse("width 1").is_ok());
    }

    #[test]
    fn parse_rejects_out_of_range_resizes() {
        assert!(parse("resize 0 100").is_err());
        assert!(parse("resize 100 0").is_err());
        assert!(parse("resize 8193 100").is_err());
        assert!(parse("resize 1000000 1000000").is_err());
        assert!(parse("resize 8192 1").is_ok());
    }

    #[test]
    fn parse_accepts_names_and_hex_colors() {
        let steps = parse("color red\ncolor #FF0000\n").expect("should parse");
        assert_eq!(steps, vec![ScriptStep::Color(RED), ScriptStep::Color(RED)]);
        assert!(parse("color mauve").is_err());
    }

    #[test]
    fn parse_rejects_malformed_touch_lists() {
        assert!(parse("touch").is_err());
        assert!(parse("touch 10").is_err());
        assert!(parse("touch 10 20 30").is_err());
        assert!(parse("touch 10 20 30 40").is_ok());
    }

    #[test]
    fn parse_rejects_extra_arguments() {
        assert!(parse("up now").is_err());
        assert!(parse("undo twice").is_err());
    }

    #[test]
    fn replay_runs_a_full_gesture() {
        let mut engine = test_engine();
        replay(&mut engine, "down 10 10\nmove 20 10\nup\n").expect("should replay");

        assert_eq!(engine.history_len(), 2);
        assert_eq!(engine.canvas().pixel(15, 10).unwrap(), BLACK.to_rgba8());
    }

    #[test]
    fn replay_ignores_multi_finger_touches() {
        let mut engine = test_engine();
        replay(&mut engine, "touch 10 10 30 30\nup\n").expect("should replay");

        assert!(!engine.is_drawing());
        assert_eq!(engine.canvas().pixel(10, 10).unwrap(), WHITE.to_rgba8());
    }

    #[test]
    fn replay_writes_the_exported_png() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.png");
        let script = format!("down 5 5\nup\nexport {}\n", path.display());

        let mut engine = test_engine();
        replay(&mut engine, &script).expect("should replay");

        let bytes = std::fs::read(&path).expect("exported file");
        let decoded = image::load_from_memory(&bytes).expect("png decodes").to_rgba8();
        assert_eq!(decoded.dimensions(), (64, 48));
        assert_eq!(*decoded.get_pixel(5, 5), BLACK.to_rgba8());
    }

    #[test]
    fn errors_stop_before_any_step_runs() {
        let mut engine = test_engine();
        let err = replay(&mut engine, "down 10 10\nup\nwidth 99\n").unwrap_err();
        assert!(matches!(err, ScriptError::BadArguments { line: 3, .. }));

        // The valid prefix must not have executed.
        assert_eq!(engine.history_len(), 1);
        assert_eq!(engine.canvas().pixel(10, 10).unwrap(), WHITE.to_rgba8());
    }
}
