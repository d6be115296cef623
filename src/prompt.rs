//! Interactive mode question.
//!
//! Anything other than a yes/no answer cancels, and the caller leaves the
//! document untouched.

use crate::reorganizer::SortMode;
use std::io::{self, BufRead, Write};

pub const QUESTION: &str = "Do you want to preserve imports under their respective comments?";

/// Interpret one answer line. `None` means the user declined to choose.
pub fn parse_answer(answer: &str) -> Option<SortMode> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(SortMode::Preserve),
        "n" | "no" => Some(SortMode::Group),
        _ => None,
    }
}

/// Ask on `output`, read one line from `input`.
pub fn ask_mode<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<Option<SortMode>> {
    write!(output, "{} [y/n] ", QUESTION)?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(None);
    }
    Ok(parse_answer(&answer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer("y"), Some(SortMode::Preserve));
        assert_eq!(parse_answer(" Yes \n"), Some(SortMode::Preserve));
        assert_eq!(parse_answer("NO"), Some(SortMode::Group));
        assert_eq!(parse_answer(""), None);
        assert_eq!(parse_answer("maybe"), None);
    }

    #[test]
    fn test_ask_mode_writes_question() {
        let mut out = Vec::new();
        let mode = ask_mode(&b"n\n"[..], &mut out).unwrap();
        assert_eq!(mode, Some(SortMode::Group));
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.starts_with(QUESTION));
    }

    #[test]
    fn test_ask_mode_eof_cancels() {
        let mode = ask_mode(&b""[..], Vec::new()).unwrap();
        assert_eq!(mode, None);
    }
}
