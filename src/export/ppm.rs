use crate::board::Board;
use crate::error::{Error, Result};
use crate::palette;
use image::Rgb;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const MAX_CHANNEL: u8 = 255;

/// Writes the board as a plain-text PPM (P3): a four-line header followed by
/// one "R G B" line per cell, row-major. Width and height are both the row
/// count, since saved boards are square.
pub fn write_board(board: &Board, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("Failed to create {}: {}", path.display(), e),
        )
    })?;
    let mut out = BufWriter::new(file);

    let size = board.size();
    writeln!(out, "P3")?;
    writeln!(out, "{}", size)?;
    writeln!(out, "{}", size)?;
    writeln!(out, "{}", MAX_CHANNEL)?;

    for (row_index, row) in board.rows().enumerate() {
        for (col_index, code) in row.iter().enumerate() {
            let Rgb([r, g, b]) = palette::color_for(code).ok_or_else(|| Error::UnknownCode {
                code: code.clone(),
                row: row_index,
                col: col_index,
            })?;
            writeln!(out, "{} {} {}", r, g, b)?;
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{tempdir, NamedTempFile};

    fn board_from(save: &str) -> Board {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(save.as_bytes()).unwrap();
        Board::load(file.path()).unwrap()
    }

    #[test]
    fn header_dimensions_equal_row_count() {
        let board = board_from("h\nh\nh\nh\n1 2 3\n4 5 6\n1 1 1\n");
        let dir = tempdir().unwrap();
        let out = dir.path().join("board.ppm");
        write_board(&board, &out).unwrap();

        let contents = fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "P3");
        assert_eq!(lines[1], "3");
        assert_eq!(lines[2], "3");
        assert_eq!(lines[3], "255");
    }

    #[test]
    fn one_pixel_line_per_cell() {
        let board = board_from("h\nh\nh\nh\n1 2\n3 4\n");
        let dir = tempdir().unwrap();
        let out = dir.path().join("board.ppm");
        write_board(&board, &out).unwrap();

        let contents = fs::read_to_string(&out).unwrap();
        assert_eq!(contents.lines().count(), 4 + 2 * 2);
    }

    #[test]
    fn cells_map_to_palette_triples_in_order() {
        let board = board_from("h\nh\nh\nh\n1 2 3\n4 5 6\n6 6 6\n");
        let dir = tempdir().unwrap();
        let out = dir.path().join("board.ppm");
        write_board(&board, &out).unwrap();

        let contents = fs::read_to_string(&out).unwrap();
        let pixels: Vec<&str> = contents.lines().skip(4).collect();
        assert_eq!(pixels[0], "255 119 34");
        assert_eq!(pixels[1], "255 255 102");
        assert_eq!(pixels[2], "119 204 51");
        assert_eq!(pixels[3], "102 170 255");
        assert_eq!(pixels[4], "51 68 255");
        assert_eq!(pixels[5], "51 51 51");
    }

    #[test]
    fn output_decodes_as_an_image() {
        let board = board_from("h\nh\nh\nh\n1 2\n3 4\n");
        let dir = tempdir().unwrap();
        let out = dir.path().join("board.ppm");
        write_board(&board, &out).unwrap();

        let img = image::open(&out).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.get_pixel(0, 0), &Rgb([255, 119, 34]));
        assert_eq!(img.get_pixel(1, 1), &Rgb([102, 170, 255]));
    }

    #[test]
    fn unknown_code_aborts_the_encode() {
        let board = board_from("h\nh\nh\nh\n1 2\n9 4\n");
        let dir = tempdir().unwrap();
        let out = dir.path().join("board.ppm");
        let err = write_board(&board, &out).unwrap_err();
        match err {
            Error::UnknownCode { code, row, col } => {
                assert_eq!(code, "9");
                assert_eq!(row, 1);
                assert_eq!(col, 0);
            }
            other => panic!("expected UnknownCode, got {}", other),
        }
    }
}
