//! Command file loader.
//!
//! # Format
//!
//! One command per line, whitespace-separated:
//!
//! ```text
//! time  uav_id  x     y
//! 0.5   0       5.0   0.0
//! 2.0   1       -3    12.5
//! ```
//!
//! Lines need not be sorted.  Every line must carry at least the four fields;
//! anything after the fourth is ignored.  A short or unparsable line aborts
//! the whole load.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use uav_core::UavId;

use crate::{Command, CommandBacklog, CommandError, CommandResult};

/// Load a command file into a sorted [`CommandBacklog`].
pub fn load_commands(path: &Path) -> CommandResult<CommandBacklog> {
    let file = std::fs::File::open(path)?;
    load_commands_reader(file)
}

/// Like [`load_commands`] but accepts any `Read` source.
pub fn load_commands_reader<R: Read>(reader: R) -> CommandResult<CommandBacklog> {
    let mut commands = Vec::new();
    for (i, line) in BufReader::new(reader).lines().enumerate() {
        commands.push(parse_line(&line?, i + 1)?);
    }
    Ok(CommandBacklog::from_commands(commands))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_line(line: &str, line_no: usize) -> CommandResult<Command> {
    let mut fields = line.split_whitespace();
    let time: f64 = parse_field(fields.next(), "time", line_no)?;
    let uav: u32 = parse_field(fields.next(), "uav_id", line_no)?;
    let x: f64 = parse_field(fields.next(), "x", line_no)?;
    let y: f64 = parse_field(fields.next(), "y", line_no)?;

    for (name, v) in [("time", time), ("x", x), ("y", y)] {
        if !v.is_finite() {
            return Err(CommandError::Parse {
                line: line_no,
                msg:  format!("{name} must be finite, got {v}"),
            });
        }
    }
    Ok(Command::new(x, y, time, UavId(uav)))
}

fn parse_field<T>(field: Option<&str>, name: &str, line_no: usize) -> CommandResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = field.ok_or_else(|| CommandError::Parse {
        line: line_no,
        msg:  format!("missing field `{name}`; expected `time uav_id x y`"),
    })?;
    raw.parse::<T>().map_err(|e| CommandError::Parse {
        line: line_no,
        msg:  format!("invalid {name} {raw:?}: {e}"),
    })
}
