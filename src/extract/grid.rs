use std::fmt;

use crate::extensions::string::CellText;

/// Separator between cells of an exported row.
pub const CELL_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridDimensions {
    pub width: usize,
    pub height: usize,
}

impl GridDimensions {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

impl fmt::Display for GridDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Splits a table body into its raw cell tokens.
pub fn tokenize_body(body: &str) -> Vec<String> {
    body.split_whitespace()
        .map(|fragment| fragment.trim_cell())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads the grid size off the way the table was wrapped in the source.
///
/// Height is the number of lines of the trimmed body, blank ones included.
/// Width is the largest number of non-empty comma-separated cells on a line.
pub fn infer_dimensions(body: &str) -> GridDimensions {
    let lines: Vec<&str> = body.trim().split('\n').collect();
    let width = lines
        .iter()
        .map(|line| line.split(',').filter(|cell| !cell.trim().is_empty()).count())
        .max()
        .unwrap_or(0);
    GridDimensions::new(width, lines.len())
}

/// Slices `tokens` into `height` rows of `width`.
///
/// Missing tokens are not padded: the last rows come out short or empty.
/// Surplus tokens past `width * height` are dropped.
pub fn reshape<T>(tokens: &[T], dims: GridDimensions) -> Vec<&[T]> {
    (0..dims.height)
        .map(|row| {
            let start = (row * dims.width).min(tokens.len());
            let end = (start + dims.width).min(tokens.len());
            &tokens[start..end]
        })
        .collect()
}

pub fn render<S: AsRef<str>>(rows: &[&[S]]) -> String {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.as_ref())
                .collect::<Vec<&str>>()
                .join(CELL_SEPARATOR)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
