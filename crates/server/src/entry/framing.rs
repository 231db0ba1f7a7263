#![forbid(unsafe_code)]

use serde_json::Value;
use std::io::{BufRead, Read, Write};

const MAX_CONTENT_LENGTH_BYTES: usize = 16 * 1024 * 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum TransportMode {
    NewlineJson,
    ContentLength,
}

pub(super) fn detect_mode_from_first_line(line: &str) -> Option<TransportMode> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return Some(TransportMode::NewlineJson);
    }
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("content-length:") || lower.starts_with("content-type:") {
        return Some(TransportMode::ContentLength);
    }
    None
}

fn parse_content_length_header(line: &str) -> Option<usize> {
    let (key, value) = line.trim().split_once(':')?;
    if !key.trim().eq_ignore_ascii_case("content-length") {
        return None;
    }
    value.trim().parse::<usize>().ok()
}

/// Reads the remaining headers after `header` and then the body. `Ok(None)`
/// means the peer closed mid-frame.
pub(super) fn read_content_length_frame<R: BufRead>(
    reader: &mut R,
    mut header: String,
) -> std::io::Result<Option<Vec<u8>>> {
    let mut content_length = parse_content_length_header(&header);

    while !header.trim_end().is_empty() {
        header.clear();
        if reader.read_line(&mut header)? == 0 {
            return Ok(None);
        }
        if content_length.is_none() {
            content_length = parse_content_length_header(&header);
        }
    }

    let Some(len) = content_length else {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "Missing Content-Length header",
        ));
    };
    if len > MAX_CONTENT_LENGTH_BYTES {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "Content-Length exceeds max allowed size",
        ));
    }

    let mut body = vec![0u8; len];
    reader.read_exact(&mut body)?;
    Ok(Some(body))
}

pub(super) fn write_message<W: Write>(
    writer: &mut W,
    mode: TransportMode,
    message: &Value,
) -> std::io::Result<()> {
    let body = serde_json::to_vec(message)?;
    match mode {
        TransportMode::NewlineJson => {
            writer.write_all(&body)?;
            writer.write_all(b"\n")?;
        }
        TransportMode::ContentLength => {
            write!(writer, "Content-Length: {}\r\n\r\n", body.len())?;
            writer.write_all(&body)?;
        }
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn detects_both_framings() {
        assert_eq!(
            detect_mode_from_first_line("  {\"id\":1}"),
            Some(TransportMode::NewlineJson)
        );
        assert_eq!(
            detect_mode_from_first_line("Content-Length: 12\r\n"),
            Some(TransportMode::ContentLength)
        );
        assert_eq!(detect_mode_from_first_line("\r\n"), None);
        assert_eq!(detect_mode_from_first_line("hello"), None);
    }

    #[test]
    fn reads_a_content_length_frame() {
        let mut reader = Cursor::new(b"Content-Type: json\r\n\r\n{\"a\":1}".to_vec());
        let body = read_content_length_frame(&mut reader, "Content-Length: 7\r\n".to_string())
            .expect("read")
            .expect("frame");
        assert_eq!(body, b"{\"a\":1}");
    }

    #[test]
    fn missing_length_is_invalid_data() {
        let mut reader = Cursor::new(b"\r\n".to_vec());
        let err = read_content_length_frame(&mut reader, "Content-Type: json\r\n".to_string())
            .expect_err("no length");
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
