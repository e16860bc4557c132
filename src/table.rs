//! HTML table to row/column grid conversion

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use tracing::debug;

static TABLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("valid table selector"));

static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("valid row selector"));

static PARAGRAPH_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("valid paragraph selector"));

/// Cell text of one table, row 0 being the header row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawGrid {
    pub rows: Vec<Vec<String>>,
}

impl RawGrid {
    #[must_use]
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Rows after the header
    #[must_use]
    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or_default()
    }

    /// Column count: the widest row
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn is_named(element: ElementRef<'_>, name: &str) -> bool {
    element.value().name().eq_ignore_ascii_case(name)
}

/// Closest `<table>` strictly above `element`
fn enclosing_table(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| is_named(*ancestor, "table"))
}

/// Parse `html` and convert every table without a `<table>` ancestor to a grid
#[must_use]
pub fn extract_top_level_grids(html: &str) -> Vec<RawGrid> {
    let document = Html::parse_document(html);

    let grids: Vec<RawGrid> = document
        .select(&TABLE_SELECTOR)
        .filter(|table| enclosing_table(*table).is_none())
        .map(table_to_grid)
        .collect();

    debug!("Extracted {} top-level tables", grids.len());
    grids
}

/// Convert one table into a grid. Rows of nested tables are not included.
#[must_use]
pub fn table_to_grid(table: ElementRef<'_>) -> RawGrid {
    let rows = table
        .select(&ROW_SELECTOR)
        .filter(|row| enclosing_table(*row) == Some(table))
        .map(|row| {
            row.children()
                .filter_map(ElementRef::wrap)
                .filter(|cell| is_named(*cell, "td") || is_named(*cell, "th"))
                .map(cell_text)
                .collect::<Vec<_>>()
        })
        .filter(|cells| !cells.is_empty())
        .collect();

    RawGrid { rows }
}

/// Trimmed paragraphs joined by newlines, or the cell's trimmed text fragments
fn cell_text(cell: ElementRef<'_>) -> String {
    let paragraphs: Vec<String> = cell
        .select(&PARAGRAPH_SELECTOR)
        .map(|p| p.text().collect::<String>().trim().to_string())
        .collect();

    if paragraphs.is_empty() {
        cell.text().map(str::trim).collect()
    } else {
        paragraphs.join("\n")
    }
}
