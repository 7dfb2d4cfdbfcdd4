//! Instance file reader.
//!
//! Accepted shape:
//!
//! ```text
//! NAME : example           <- 3 header lines, ignored
//! COMMENT : ...
//! TYPE : TSP
//! DIMENSION : 4            <- point count after the last ':'
//! EDGE_WEIGHT_TYPE : EUC_2D  <- 2 lines, ignored
//! NODE_COORD_SECTION
//! 1 0.0 0.0                <- exactly DIMENSION lines of `id x y`
//! ...
//! EOF                      <- anything after is ignored
//! ```

use super::Point;
use crate::error::LoadError;

const HEADER_LINES: usize = 3;
const SECTION_MARKER_LINES: usize = 2;

/// Parses instance text into points in file order.
///
/// # Errors
///
/// Any structural defect yields a [`LoadError`]; nothing is partially
/// loaded.
///
/// # Examples
///
/// ```
/// use tsp_anneal::instance::parser::parse_instance;
///
/// let text = "NAME : t\nCOMMENT : c\nTYPE : TSP\nDIMENSION : 2\n\
///             EDGE_WEIGHT_TYPE : EUC_2D\nNODE_COORD_SECTION\n1 0 0\n2 3 4\n";
/// let points = parse_instance(text).unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!(points[1].x, 3.0);
/// ```
pub fn parse_instance(text: &str) -> Result<Vec<Point>, LoadError> {
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));

    for _ in 0..HEADER_LINES {
        lines.next();
    }

    let (dim_line, dim_text) = lines.next().ok_or(LoadError::MissingDimension {
        line: HEADER_LINES + 1,
    })?;
    let n = parse_dimension(dim_line, dim_text)?;

    for _ in 0..SECTION_MARKER_LINES {
        lines.next();
    }

    // DIMENSION is untrusted; the vector grows with the lines actually read.
    let mut points = Vec::new();
    for (line, content) in lines.take(n) {
        points.push(parse_point(line, content)?);
    }
    if points.len() < n {
        return Err(LoadError::TruncatedCoordinates {
            expected: n,
            found: points.len(),
        });
    }
    Ok(points)
}

fn parse_dimension(line: usize, text: &str) -> Result<usize, LoadError> {
    let value = match text.rsplit_once(':') {
        Some((_, v)) => v.trim(),
        None => text.split_whitespace().last().unwrap_or(""),
    };
    value.parse().map_err(|_| LoadError::InvalidDimension {
        line,
        value: value.to_string(),
    })
}

fn parse_point(line: usize, text: &str) -> Result<Point, LoadError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(LoadError::FieldCount {
            line,
            found: fields.len(),
        });
    }
    let invalid = |field: &'static str, value: &str| LoadError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
    };
    let id = fields[0].parse().map_err(|_| invalid("id", fields[0]))?;
    let x = fields[1].parse().map_err(|_| invalid("x", fields[1]))?;
    let y = fields[2].parse().map_err(|_| invalid("y", fields[2]))?;
    Ok(Point::new(id, x, y))
}
