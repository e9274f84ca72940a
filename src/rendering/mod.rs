//! Plain-text view of the universe.
//!
//! Each generation renders as a header line followed by one `|`-delimited
//! line per grid row, live cells as `*` and dead cells as a space:
//!
//! ```text
//! Generation of the universe №3:
//! | |*| |
//! | |*| |
//! | |*| |
//! ```
//!
//! `parse_rows` is the exact inverse of `rows`, so a rendered universe can
//! be read back losslessly.

use crate::domain::{Cell, Universe};

/// Marker for a live cell
pub const ALIVE_MARKER: char = '*';
/// Marker for a dead cell
pub const DEAD_MARKER: char = ' ';
/// Delimiter bounding every cell in a rendered row
pub const SEPARATOR: char = '|';

/// Header line printed above each generation.
/// The trailing space is part of the output format.
pub fn header(generation: u64) -> String {
    format!("Generation of the universe №{generation}: ")
}

/// Render the universe lazily, one string per row, top to bottom.
/// The iterator is finite and can be recreated on demand every
/// generation.
pub fn rows(universe: &Universe) -> impl Iterator<Item = String> + '_ {
    universe.rows().map(|row| {
        let mut line = String::with_capacity(row.len() * 2 + 1);
        line.push(SEPARATOR);
        for cell in row {
            line.push(if cell.is_alive() {
                ALIVE_MARKER
            } else {
                DEAD_MARKER
            });
            line.push(SEPARATOR);
        }
        line
    })
}

/// Parse rendered rows back into a universe.
/// Returns `None` when a line deviates from the `rows` format or the
/// row set is not square.
pub fn parse_rows<I, S>(lines: I) -> Option<Universe>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed: Vec<Vec<Cell>> = Vec::new();

    for line in lines {
        let chars: Vec<char> = line.as_ref().chars().collect();
        // A row of n cells renders to exactly 2n + 1 characters
        if chars.len() < 3 || chars.len() % 2 == 0 {
            return None;
        }

        let mut row = Vec::with_capacity(chars.len() / 2);
        for (position, &c) in chars.iter().enumerate() {
            if position % 2 == 0 {
                if c != SEPARATOR {
                    return None;
                }
            } else {
                row.push(match c {
                    ALIVE_MARKER => Cell::Alive,
                    DEAD_MARKER => Cell::Dead,
                    _ => return None,
                });
            }
        }
        parsed.push(row);
    }

    let size = parsed.len();
    if size == 0 || parsed.iter().any(|row| row.len() != size) {
        return None;
    }

    let mut universe = Universe::new(size);
    for (y, row) in parsed.iter().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            universe.set(x, y, cell);
        }
    }
    Some(universe)
}
