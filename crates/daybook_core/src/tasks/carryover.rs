//! Line-oriented Tasks section scanner.
//!
//! # Responsibility
//! - Track the scan position with an explicit state machine.
//! - Echo every consumed line to a diagnostic sink on a best-effort basis.
//!
//! # Invariants
//! - Heading lines are never emitted.
//! - Only the first `[]` of a carried line is rewritten to `*[]`.
//! - `Stopped` is terminal.

use crate::model::journal::{
    DEFERRED_MARKER, INCOMPLETE_MARKER, INTERACTIONS_HEADING, TASKS_HEADING,
};
use log::{debug, warn};
use std::io::{self, BufRead, Write};

/// Position of the scanner relative to the Tasks section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// No Tasks heading seen yet.
    BeforeTasks,
    /// Inside the Tasks section; incomplete lines are carried.
    InTasks,
    /// Interactions heading reached; remaining input is ignored.
    Stopped,
}

impl ScanState {
    /// Applies one line and returns the next state plus the line to carry, if any.
    pub fn next(self, line: &str) -> (ScanState, Option<String>) {
        match self {
            Self::Stopped => (Self::Stopped, None),
            _ if line.starts_with(INTERACTIONS_HEADING) => (Self::Stopped, None),
            _ if line.starts_with(TASKS_HEADING) => (Self::InTasks, None),
            Self::InTasks => (Self::InTasks, defer_task(line)),
            Self::BeforeTasks => (Self::BeforeTasks, None),
        }
    }
}

/// Returns `line` with its first incomplete marker deferred, or `None` for
/// lines without one.
pub fn defer_task(line: &str) -> Option<String> {
    line.contains(INCOMPLETE_MARKER)
        .then(|| line.replacen(INCOMPLETE_MARKER, DEFERRED_MARKER, 1))
}

/// Reads a previous journal and returns the task lines to carry forward.
///
/// Each raw line read is also written to `echo`. Echo failures are logged once
/// and stop the echo only. Bytes that are not UTF-8 are decoded lossily. An
/// empty reader yields an empty list.
///
/// # Errors
/// - Returns the underlying I/O error when reading fails.
pub fn carry_over_tasks<R, W>(mut reader: R, echo: &mut W) -> io::Result<Vec<String>>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let mut state = ScanState::BeforeTasks;
    let mut carried = Vec::new();
    let mut lines_read = 0_usize;
    let mut echo_on = true;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let raw = trim_line_ending(&buf);
        lines_read += 1;
        if echo_on {
            echo_on = echo_line(echo, raw);
        }

        let line = String::from_utf8_lossy(raw);
        let (next, task) = state.next(&line);
        state = next;
        if state == ScanState::Stopped {
            break;
        }
        if let Some(task) = task {
            carried.push(task);
        }
    }
    if echo_on {
        if let Err(err) = echo.flush() {
            warn!("event=tasks_echo module=tasks status=error error={}", err);
        }
    }

    debug!(
        "event=tasks_scan module=tasks status=ok lines_read={} carried={} final_state={:?}",
        lines_read,
        carried.len(),
        state
    );
    Ok(carried)
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

// Returns whether echoing should continue.
fn echo_line<W: Write + ?Sized>(echo: &mut W, raw: &[u8]) -> bool {
    match echo.write_all(raw).and_then(|()| echo.write_all(b"\n")) {
        Ok(()) => true,
        Err(err) => {
            warn!(
                "event=tasks_echo module=tasks status=error error={} echo=disabled",
                err
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{carry_over_tasks, defer_task, ScanState};
    use std::io::{self, Cursor, Write};

    struct BrokenPipe {
        attempts: usize,
    }

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            self.attempts += 1;
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    fn carry(text: &str) -> Vec<String> {
        carry_over_tasks(Cursor::new(text), &mut io::sink()).unwrap()
    }

    #[test]
    fn carries_only_incomplete_tasks_before_interactions() {
        let text = "## Tasks\n- [] buy milk\n- [x] done\n## Interactions\n- [] should not appear\n";
        assert_eq!(carry(text), vec!["- *[] buy milk".to_string()]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(carry("").is_empty());
    }

    #[test]
    fn missing_tasks_heading_yields_nothing() {
        let text = "# Title\n- [] floating task\n## Notes\n- [] another\n";
        assert!(carry(text).is_empty());
    }

    #[test]
    fn lines_before_tasks_heading_are_ignored() {
        let text = "- [] early\n## Tasks\n- [] kept\n";
        assert_eq!(carry(text), vec!["- *[] kept".to_string()]);
    }

    #[test]
    fn already_deferred_tasks_gain_another_marker() {
        let text = "## Tasks\n- **[] old chore\n";
        assert_eq!(carry(text), vec!["- ***[] old chore".to_string()]);
    }

    #[test]
    fn only_first_marker_is_rewritten() {
        assert_eq!(
            defer_task("- [] compare [] and [x]").as_deref(),
            Some("- *[] compare [] and [x]")
        );
        assert_eq!(defer_task("- [x] finished"), None);
    }

    #[test]
    fn heading_match_is_by_prefix() {
        let text = "## Tasks for today\n- [] a\n## Interactions (people)\n- [] b\n";
        assert_eq!(carry(text), vec!["- *[] a".to_string()]);
    }

    #[test]
    fn interactions_before_tasks_stops_scan() {
        let text = "## Interactions\n## Tasks\n- [] never\n";
        assert!(carry(text).is_empty());
    }

    #[test]
    fn crlf_line_endings_are_stripped() {
        let text = "## Tasks\r\n- [] windows\r\n";
        assert_eq!(carry(text), vec!["- *[] windows".to_string()]);
    }

    #[test]
    fn echoes_lines_up_to_and_including_stop_heading() {
        let text = "## Tasks\n- [] a\n## Interactions\nafter\n";
        let mut echo = Vec::new();
        carry_over_tasks(Cursor::new(text), &mut echo).unwrap();
        assert_eq!(
            String::from_utf8(echo).unwrap(),
            "## Tasks\n- [] a\n## Interactions\n"
        );
    }

    #[test]
    fn stopped_state_is_terminal() {
        let (state, task) = ScanState::Stopped.next("## Tasks");
        assert_eq!(state, ScanState::Stopped);
        assert_eq!(task, None);

        let (state, task) = ScanState::Stopped.next("- [] x");
        assert_eq!(state, ScanState::Stopped);
        assert_eq!(task, None);
    }

    #[test]
    fn repeated_tasks_heading_keeps_scanning() {
        let (state, task) = ScanState::InTasks.next("## Tasks");
        assert_eq!(state, ScanState::InTasks);
        assert_eq!(task, None);
    }

    #[test]
    fn non_utf8_bytes_do_not_stop_the_scan() {
        let text: &[u8] = b"## Tasks\n- [] caf\xe9 meeting\n- [] keep me\n";
        let mut echo = Vec::new();
        let carried = carry_over_tasks(Cursor::new(text), &mut echo).unwrap();

        assert_eq!(
            carried,
            vec!["- *[] caf\u{FFFD} meeting".to_string(), "- *[] keep me".to_string()]
        );
        assert_eq!(echo, text);
    }

    #[test]
    fn failing_echo_sink_is_not_fatal() {
        let text = "## Tasks\n- [] a\n- [] b\n## Interactions\n";
        let mut sink = BrokenPipe { attempts: 0 };
        let carried = carry_over_tasks(Cursor::new(text), &mut sink).unwrap();

        assert_eq!(carried, vec!["- *[] a".to_string(), "- *[] b".to_string()]);
        assert_eq!(sink.attempts, 1);
    }
}
