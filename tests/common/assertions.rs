//! Record parsing and assertion helpers for dbglog harnesses.

use chrono::NaiveDateTime;

/// A parsed file-sink record: `[ts][function][line][thread id]: message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub timestamp: NaiveDateTime,
    pub function: String,
    pub line: u32,
    pub thread_id: u64,
    pub message: String,
}

/// Parse one file line. Returns `None` if the line is not well formed.
pub fn parse_file_record(line: &str) -> Option<FileRecord> {
    let rest = line.strip_prefix('[')?;
    let (timestamp, rest) = rest.split_once("][")?;
    let (function, rest) = rest.split_once("][")?;
    let (line_no, rest) = rest.split_once("][")?;
    let (thread_id, message) = rest.split_once("]: ")?;

    Some(FileRecord {
        timestamp: NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S").ok()?,
        function: function.to_string(),
        line: line_no.parse().ok()?,
        thread_id: thread_id.parse().ok()?,
        message: message.to_string(),
    })
}

/// Parse a file line or panic with the offending text.
pub fn expect_file_record(line: &str) -> FileRecord {
    parse_file_record(line).unwrap_or_else(|| panic!("malformed file record: {line:?}"))
}

/// Assert that a console line is `<label>: <function> <line>: <message>`.
///
/// ```rust
/// assert_console_line!(lines[0], "Error", "boot_sequence", 41, "boot");
/// ```
#[macro_export]
macro_rules! assert_console_line {
    ($line:expr, $label:expr, $function:expr, $line_no:expr, $message:expr) => {{
        let actual: &str = &$line;
        let expected = format!("{}: {} {}: {}", $label, $function, $line_no, $message);
        pretty_assertions::assert_eq!(actual, expected.as_str());
    }};
}

/// Assert that a console line is the sink-unavailable diagnostic for a call site.
#[macro_export]
macro_rules! assert_unavailable_line {
    ($line:expr, $function:expr, $line_no:expr) => {{
        let actual: &str = &$line;
        let expected = format!("[{}][{}]: file sink unavailable", $function, $line_no);
        pretty_assertions::assert_eq!(actual, expected.as_str());
    }};
}
