//! The plain line protocol: banner, `-> ` prompt, one reply line per request.

use std::io::{self, BufRead, ErrorKind, Write};

use tracing::{debug, error, info, warn};

use crate::calc_engine::calculate;
use crate::config::{
    BANNER_SEPARATOR, BANNER_TITLE, ERROR_LABEL, EXIT_COMMAND, PROMPT, RESULT_LABEL,
};

enum Request {
    Line,
    EndOfInput,
    Unreadable(io::Error),
}

/// Builds the reply for one input line, or `None` when the line asks to exit.
pub fn respond(line: &str) -> Option<String> {
    let line = line.trim();
    if line == EXIT_COMMAND {
        return None;
    }

    Some(match calculate(line) {
        Ok(result) => format!("{} {}", RESULT_LABEL, result),
        Err(e) => format!("{} {}", ERROR_LABEL, e),
    })
}

/// Runs the read loop until `exit` or end of input.
///
/// Recoverable failures are written to `output` and the loop goes on. A read
/// error other than an interrupted call or a non-UTF-8 line ends the loop and
/// is returned.
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    writeln!(output, "{}", BANNER_TITLE)?;
    writeln!(output, "{}", BANNER_SEPARATOR)?;

    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        match read_request(&mut input, &mut line) {
            Ok(Request::Line) => {}
            Ok(Request::EndOfInput) => {
                info!("end of input");
                writeln!(output)?;
                return Ok(());
            }
            Ok(Request::Unreadable(e)) => {
                warn!(error = %e, "skipping unreadable line");
                writeln!(output, "{} {}", ERROR_LABEL, e)?;
                continue;
            }
            Err(e) => {
                error!(error = %e, "failed to read input");
                return Err(e);
            }
        }

        debug!(line = line.trim_end(), "request");
        match respond(&line) {
            Some(reply) => writeln!(output, "{}", reply)?,
            None => {
                info!("exit requested");
                return Ok(());
            }
        }
    }
}

fn read_request<R: BufRead>(input: &mut R, line: &mut String) -> io::Result<Request> {
    loop {
        line.clear();
        match input.read_line(line) {
            Ok(0) => return Ok(Request::EndOfInput),
            Ok(_) => return Ok(Request::Line),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            // read_line has already consumed the bad bytes
            Err(e) if e.kind() == ErrorKind::InvalidData => return Ok(Request::Unreadable(e)),
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replies_carry_a_label() {
        assert_eq!(
            respond("\"ab\" * 3\n"),
            Some("Результат: ababab".to_string())
        );
        assert_eq!(
            respond("\"ab\" * 0"),
            Some("Ошибка: number 0 is out of range 1..=10".to_string())
        );
        assert_eq!(respond(""), Some("Ошибка: empty input".to_string()));
    }

    #[test]
    fn exit_is_case_sensitive_and_trimmed() {
        assert_eq!(respond("  exit \n"), None);
        assert!(respond("EXIT").is_some());
        assert!(respond("exit now").is_some());
    }
}
