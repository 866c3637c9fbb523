//! Shared helpers for integration tests.

use console_logger::Logger;

/// Logger capturing its output in memory.
#[allow(dead_code)]
pub fn capture_logger() -> Logger<Vec<u8>> {
    Logger::with_writer("TestApp", "1.0", Vec::new())
}

/// Lines written so far, with the trailing newline stripped.
pub fn output_lines(logger: &Logger<Vec<u8>>) -> Vec<String> {
    String::from_utf8(logger.get_ref().clone())
        .expect("log output is utf-8")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Extract the bracketed timestamp from a rendered line.
#[allow(dead_code)]
pub fn timestamp_of(line: &str) -> &str {
    let start = line.find("] [").expect("label is followed by timestamp") + 3;
    let end = start + line[start..].find(']').expect("timestamp is closed");
    &line[start..end]
}

/// `YYYY-MM-DDTHH:MM:SS.mmmZ`
#[allow(dead_code)]
pub fn is_iso_millis_utc(ts: &str) -> bool {
    let bytes = ts.as_bytes();
    if bytes.len() != 24 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, &b)| match i {
        4 | 7 => b == b'-',
        10 => b == b'T',
        13 | 16 => b == b':',
        19 => b == b'.',
        23 => b == b'Z',
        _ => b.is_ascii_digit(),
    })
}
