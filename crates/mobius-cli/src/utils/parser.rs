use nalgebra::{Point2, Point3};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid coordinate '{value}' in '{input}'. Expected a number.")]
    InvalidCoordinate { input: String, value: String },

    #[error("Expected {expected} comma-separated coordinates in '{input}', found {found}.")]
    WrongArity {
        input: String,
        expected: usize,
        found: usize,
    },

    #[error("Coordinate '{value}' in '{input}' is not finite.")]
    NonFinite { input: String, value: String },
}

fn parse_coordinates<const N: usize>(input: &str) -> Result<[f64; N], ParseError> {
    let parts: Vec<&str> = input
        .trim()
        .trim_start_matches(['(', '['])
        .trim_end_matches([')', ']'])
        .split(',')
        .map(str::trim)
        .collect();
    if parts.len() != N {
        return Err(ParseError::WrongArity {
            input: input.to_string(),
            expected: N,
            found: parts.len(),
        });
    }

    let mut coords = [0.0; N];
    for (slot, part) in coords.iter_mut().zip(&parts) {
        let value: f64 = part.parse().map_err(|_| ParseError::InvalidCoordinate {
            input: input.to_string(),
            value: part.to_string(),
        })?;
        if !value.is_finite() {
            return Err(ParseError::NonFinite {
                input: input.to_string(),
                value: part.to_string(),
            });
        }
        *slot = value;
    }
    Ok(coords)
}

/// Parses `x,y,z`, optionally wrapped in parentheses or brackets.
pub fn parse_point3(input: &str) -> Result<Point3<f64>, ParseError> {
    parse_coordinates::<3>(input).map(Point3::from)
}

/// Parses `x,y`, optionally wrapped in parentheses or brackets.
pub fn parse_point2(input: &str) -> Result<Point2<f64>, ParseError> {
    parse_coordinates::<2>(input).map(Point2::from)
}
