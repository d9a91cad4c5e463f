//! Menu selection parsing

use std::io::BufRead;

use crate::catalog::QueryId;

use super::errors::{SelectionError, SessionError, SessionResult};

/// Parse one line of user input into a query id
///
/// Surrounding whitespace is ignored. Input must fit a 32-bit signed
/// integer; anything larger is not a number. The error carries the trimmed
/// input or the parsed number for the message shown to the user.
pub fn parse_selection(line: &str) -> Result<QueryId, SelectionError> {
    let input = line.trim();
    let number: i32 = input
        .parse()
        .map_err(|_| SelectionError::InvalidInput(input.to_string()))?;
    QueryId::new(i64::from(number)).map_err(|_| SelectionError::OutOfRange(number))
}

/// Read one line, failing with `InputClosed` at end of input
pub fn read_line<R: BufRead>(reader: &mut R) -> SessionResult<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(SessionError::InputClosed);
    }
    Ok(line)
}
