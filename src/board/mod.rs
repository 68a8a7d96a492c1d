use crate::error::Result;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Number of header/metadata lines at the top of a board save. Their content
/// is ignored entirely; rows start on the line after them.
pub const SAVE_HEADER_LINES: usize = 4;

/// A saved board, parsed into rows of category codes. Saves are assumed to be
/// square; nothing here checks that rows all have the same length.
#[derive(Debug)]
pub struct Board {
    rows: Vec<Vec<String>>,
}

impl Board {
    pub fn load(path: &Path) -> Result<Board> {
        if !path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            )
            .into());
        }

        let file = File::open(path).map_err(|e| {
            io::Error::new(e.kind(), format!("Failed to open {}: {}", path.display(), e))
        })?;
        let reader = BufReader::new(file);

        let mut rows = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if index < SAVE_HEADER_LINES {
                continue;
            }

            // Tokens are space-separated; runs of separators collapse. A line
            // with no tokens still counts as a row.
            let row: Vec<String> = line
                .split_whitespace()
                .map(|code| code.to_string())
                .collect();
            rows.push(row);
        }

        Ok(Board { rows })
    }

    /// Side length of the board. The save format stores square boards, so the
    /// row count doubles as the width.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(|row| row.as_slice())
    }
}
