use crate::ReplError;
use std::collections::VecDeque;
use std::io::{BufRead, Read};
use std::str::FromStr;

/// Whitespace-separated tokens pulled lazily from a line reader.
///
/// Input bytes that are not UTF-8 are replaced rather than rejected.
pub(crate) struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub(crate) fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// The next token, or `None` once the input is exhausted.
    pub(crate) fn next_token(&mut self) -> Result<Option<String>, ReplError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let Some(line) = read_line(&mut self.input)? else {
                return Ok(None);
            };
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    pub(crate) fn expect_token(&mut self, expected: &'static str) -> Result<String, ReplError> {
        self.next_token()?
            .ok_or(ReplError::UnexpectedEof { expected })
    }

    pub(crate) fn expect_number<T: FromStr>(
        &mut self,
        expected: &'static str,
    ) -> Result<T, ReplError> {
        let token = self.expect_token(expected)?;
        parse_number(&token)
    }
}

pub(crate) fn parse_number<T: FromStr>(token: &str) -> Result<T, ReplError> {
    token.parse().map_err(|_| ReplError::InvalidNumber {
        token: token.to_string(),
    })
}

/// Longest input line accepted, in bytes, not counting the terminator.
pub const MAX_LINE_BYTES: usize = 256 * 1024;

/// Reads one line without its terminator, `None` at end of input.
pub(crate) fn read_line(input: &mut impl BufRead) -> Result<Option<String>, ReplError> {
    let mut raw = Vec::new();
    let limit = MAX_LINE_BYTES as u64 + 1;
    if input.by_ref().take(limit).read_until(b'\n', &mut raw)? == 0 {
        return Ok(None);
    }
    if raw.len() > MAX_LINE_BYTES && raw.last() != Some(&b'\n') {
        return Err(ReplError::LimitExceeded {
            what: "line length",
            value: raw.len(),
            limit: MAX_LINE_BYTES,
        });
    }
    let line = String::from_utf8_lossy(&raw);
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_span_lines() {
        let mut tokens = Tokens::new("add 0\n\n  5 \r\nprint".as_bytes());
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("add"));
        assert_eq!(tokens.expect_number::<usize>("position").unwrap(), 0);
        assert_eq!(tokens.expect_number::<i64>("item").unwrap(), 5);
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("print"));
        assert_eq!(tokens.next_token().unwrap(), None);
    }

    #[test]
    fn test_expect_reports_eof_and_bad_numbers() {
        let mut tokens = Tokens::new("x".as_bytes());
        assert_eq!(
            tokens.expect_number::<i32>("age"),
            Err(ReplError::InvalidNumber {
                token: "x".to_string()
            })
        );
        assert_eq!(
            tokens.expect_token("name"),
            Err(ReplError::UnexpectedEof { expected: "name" })
        );
    }

    #[test]
    fn test_read_line_strips_terminators() {
        let mut input = "i ab 3\r\nr ab".as_bytes();
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("i ab 3"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("r ab"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut tokens = Tokens::new(&b"ok \xff\n"[..]);
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("ok"));
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("\u{fffd}"));
    }

    #[test]
    fn test_read_line_length_limit() {
        let fits = format!("{}\nnext", "a".repeat(MAX_LINE_BYTES));
        let mut input = fits.as_bytes();
        assert_eq!(read_line(&mut input).unwrap().map(|l| l.len()), Some(MAX_LINE_BYTES));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("next"));

        let long = "a".repeat(MAX_LINE_BYTES + 10);
        let err = read_line(&mut long.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ReplError::LimitExceeded { what: "line length", limit: MAX_LINE_BYTES, .. }
        ));
    }
}
