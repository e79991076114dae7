//! Plain-text score grid.

use std::fmt;

use judgement_engine::domain::snapshot::{CellsPublic, GameSnapshot};

const MIN_CELL_WIDTH: usize = 10;

/// Displays every round that has at least one recorded value, followed by
/// running totals.
pub struct Grid<'a>(pub &'a GameSnapshot);

impl fmt::Display for Grid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snap = self.0;
        let width = snap
            .players
            .iter()
            .map(|name| name.chars().count())
            .max()
            .unwrap_or(0)
            .max(MIN_CELL_WIDTH);

        write!(f, "{:>5} {:>5} {:<8}", "Round", "Cards", "Trump")?;
        for name in &snap.players {
            write!(f, " | {name:^width$}")?;
        }
        writeln!(f)?;

        let started = snap
            .rows
            .iter()
            .filter(|row| row.cells.iter().any(|c| c.prediction.is_some()));
        for row in started {
            write!(
                f,
                "{:>5} {:>5} {:<8}",
                row.round_no,
                row.cards_dealt,
                row.trump.to_string()
            )?;
            for cell in &row.cells {
                write!(f, " | {:>width$}", cell_text(cell))?;
            }
            writeln!(f)?;
        }

        write!(f, "{:>5} {:>5} {:<8}", "", "", "Total")?;
        for total in &snap.totals {
            write!(f, " | {total:>width$}")?;
        }
        writeln!(f)
    }
}

// "prediction/tricks score", with "-" for anything not yet recorded
fn cell_text(cell: &CellsPublic) -> String {
    fn or_dash<T: ToString>(v: Option<T>) -> String {
        v.map_or_else(|| "-".to_owned(), |v| v.to_string())
    }
    format!(
        "{}/{} {:>4}",
        or_dash(cell.prediction),
        or_dash(cell.tricks),
        or_dash(cell.score)
    )
}
