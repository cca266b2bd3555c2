use thiserror::Error;
use tresraya_core::{Coord, Coord2};

/// Reasons a typed line cannot be turned into grid coordinates. Values in
/// range for `u8` but off the grid are left for the engine to refuse.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseMoveError {
    #[error("expected two numbers, like: 1 2")]
    NotTwoFields,
    #[error("`{0}` is not a row or column number")]
    NotANumber(String),
}

/// Splits a line like `"1 2"` into `(row, col)`.
pub fn parse_move(line: &str) -> Result<Coord2, ParseMoveError> {
    let mut fields = line.split_whitespace();
    let (Some(row), Some(col), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(ParseMoveError::NotTwoFields);
    };
    Ok((parse_coord(row)?, parse_coord(col)?))
}

fn parse_coord(field: &str) -> Result<Coord, ParseMoveError> {
    field
        .parse()
        .map_err(|_| ParseMoveError::NotANumber(field.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_row_and_column_pair() {
        assert_eq!(parse_move("1 2"), Ok((1, 2)));
        assert_eq!(parse_move("0 0"), Ok((0, 0)));
        assert_eq!(parse_move("  2   1  "), Ok((2, 1)));
    }

    #[test]
    fn rejects_wrong_field_counts() {
        assert_eq!(parse_move(""), Err(ParseMoveError::NotTwoFields));
        assert_eq!(parse_move("1"), Err(ParseMoveError::NotTwoFields));
        assert_eq!(parse_move("1 2 3"), Err(ParseMoveError::NotTwoFields));
    }

    #[test]
    fn rejects_fields_that_are_not_numbers() {
        assert_eq!(parse_move("a b"), Err(ParseMoveError::NotANumber("a".into())));
        assert_eq!(parse_move("1 x"), Err(ParseMoveError::NotANumber("x".into())));
        assert_eq!(parse_move("-1 0"), Err(ParseMoveError::NotANumber("-1".into())));
    }

    #[test]
    fn off_grid_numbers_parse_and_are_left_to_the_engine() {
        assert_eq!(parse_move("7 7"), Ok((7, 7)));
    }
}
