//! JSON output utilities for CLI commands.
//!
//! With `--json` every command writes NDJSON: one event object per line on
//! stdout, starting with `start` and ending with `complete`.
//!
//! ```ignore
//! use crate::ui::json::{emit_event, events::*};
//!
//! emit_event(&StartEvent::new("fill"))?;
//! emit_event(&CompleteEvent::success("fill"))?;
//! ```

pub mod events;

use serde::Serialize;
use std::io::{self, Write};

/// Emit a typed event as NDJSON to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_typed_event(&mut out, event)
}

/// Write a typed event to a custom writer.
pub fn write_typed_event<T: Serialize, W: Write>(out: &mut W, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use events::*;

    #[test]
    fn write_typed_event_emits_one_line() {
        let mut buffer = Vec::new();
        let event = StartEvent::new("check");

        write_typed_event(&mut buffer, &event).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.ends_with('\n'));

        let parsed: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(parsed["event"], "start");
        assert_eq!(parsed["command"], "check");
    }

    #[test]
    fn events_form_ndjson_stream() {
        let mut buffer = Vec::new();

        write_typed_event(&mut buffer, &StartEvent::new("fill")).unwrap();
        write_typed_event(&mut buffer, &WarningEvent::new("fill", "careful")).unwrap();
        write_typed_event(&mut buffer, &CompleteEvent::success("fill")).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        for line in lines {
            assert!(serde_json::from_str::<serde_json::Value>(line).is_ok());
        }
    }
}
