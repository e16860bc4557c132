//! Header validation and remapping onto the canonical rate schema

use crate::table::RawGrid;
use crate::vocabulary::{Field, FieldAliases, FieldColumns};
use tracing::debug;

/// One data row with its cells assigned to canonical fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateRow {
    pub service: String,
    pub entry: String,
    pub rate: String,
}

/// A grid that passed header matching, header row removed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchedTable {
    pub rows: Vec<RateRow>,
}

/// Accept a grid whose three headers map one-to-one onto the canonical fields.
///
/// Anything else (wrong width, unknown header, a field claimed twice) is
/// rejected. Data rows shorter than the header get empty cells.
#[must_use]
pub fn match_schema(grid: &RawGrid, aliases: &FieldAliases) -> Option<MatchedTable> {
    if grid.width() != Field::ALL.len() {
        debug!("Rejecting table with {} columns", grid.width());
        return None;
    }

    let header = grid.header()?;
    let Some(columns) = aliases.match_headers(header) else {
        debug!("Rejecting table with headers {header:?}");
        return None;
    };

    let rows = grid
        .data_rows()
        .iter()
        .map(|cells| remap_row(cells, columns))
        .collect();

    Some(MatchedTable { rows })
}

fn remap_row(cells: &[String], columns: FieldColumns) -> RateRow {
    let cell = |field: Field| {
        cells
            .get(columns.column(field))
            .cloned()
            .unwrap_or_default()
    };

    RateRow {
        service: cell(Field::Service),
        entry: cell(Field::Entry),
        rate: cell(Field::Rate),
    }
}
