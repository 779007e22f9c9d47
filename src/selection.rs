use derive_more::{Display, Error};
use log::debug;

/// Stands in for any line that does not start with an integer.
pub const MALFORMED_SENTINEL: i64 = -1;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Selection {
    Play,
    Insert,
    Exit,
}

#[derive(Clone, Debug, Display, Eq, PartialEq, Error)]
pub enum SelectionError {
    #[display("Invalid option. Please choose 1, 2, or 0.")]
    InvalidSelection { value: i64 },
    #[display("Expected a number, got {input:?}")]
    MalformedInput { input: String },
}

impl Selection {
    /// Interpret one line of user input.
    ///
    /// Only the leading integer counts; anything after it on the line is ignored.
    pub fn parse(line: &str) -> Result<Selection, SelectionError> {
        let value = leading_integer(line).unwrap_or_else(|e| {
            debug!("{e}, using sentinel {MALFORMED_SENTINEL}");
            MALFORMED_SENTINEL
        });
        Selection::try_from(value)
    }
}

impl TryFrom<i64> for Selection {
    type Error = SelectionError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Selection::Play),
            2 => Ok(Selection::Insert),
            0 => Ok(Selection::Exit),
            value => Err(SelectionError::InvalidSelection { value }),
        }
    }
}

fn leading_integer(line: &str) -> Result<i64, SelectionError> {
    let trimmed = line.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    trimmed[..sign_len + digits_len]
        .parse()
        .map_err(|_| SelectionError::MalformedInput {
            input: line.trim_end().to_string(),
        })
}
