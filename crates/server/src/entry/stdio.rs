#![forbid(unsafe_code)]

use super::framing::{
    TransportMode, detect_mode_from_first_line, read_content_length_frame, write_message,
};
use crate::server::ActionServer;
use crate::support::parse_request;
use std::io::{BufRead, BufReader, Write};

pub(crate) fn run_stdio(server: &mut ActionServer) -> std::io::Result<()> {
    let stdin = std::io::stdin();
    let mut reader = BufReader::new(stdin.lock());
    let mut stdout = std::io::stdout().lock();
    serve(server, &mut reader, &mut stdout)
}

/// Serves requests until EOF. Framing is detected once from the first
/// non-blank line and kept for the rest of the session.
pub(crate) fn serve<R: BufRead, W: Write>(
    server: &mut ActionServer,
    reader: &mut R,
    writer: &mut W,
) -> std::io::Result<()> {
    let mut mode: Option<TransportMode> = None;

    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let current = match mode {
            Some(current) => current,
            None => {
                let Some(detected) = detect_mode_from_first_line(&line) else {
                    tracing::warn!("skipping unframed input line");
                    continue;
                };
                tracing::debug!(mode = ?detected, "transport framing detected");
                mode = Some(detected);
                detected
            }
        };

        let body = match current {
            TransportMode::NewlineJson => line.trim().as_bytes().to_vec(),
            TransportMode::ContentLength => match read_content_length_frame(reader, line)? {
                Some(body) => body,
                None => break,
            },
        };

        let response = match parse_request(&body) {
            Ok(request) => server.handle(request),
            Err(error) => Some(error),
        };
        if let Some(response) = response {
            write_message(writer, current, &response)?;
        }
        for notification in server.take_notifications() {
            write_message(writer, current, &notification)?;
        }
    }

    Ok(())
}
