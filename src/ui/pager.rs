//! Raw data pager: shows the filtered rows a page at a time on request.

use crate::data::TripTable;
use crate::errors::AppResult;
use crate::ui::console::Console;
use crate::utils::table::Table;
use std::io::{BufRead, Write};

pub fn raw_data_prompt(page_size: usize) -> String {
    format!("Would you like to see {page_size} rows of raw data? Type 'Yes' or 'No'.")
}

/// Render rows `[cursor, cursor + size)` with the source header.
/// Returns `None` when the window holds no row.
pub fn render_page(table: &TripTable, cursor: usize, size: usize) -> Option<String> {
    let rows = table.page(cursor, size);
    if rows.is_empty() {
        return None;
    }

    let headers = std::iter::once("#".to_string()).chain(table.schema().columns().iter().cloned());
    let mut grid = Table::with_headers(headers).align_right(0);

    for (offset, row) in rows.iter().enumerate() {
        let mut cells = vec![(cursor + offset).to_string()];
        cells.extend(row.raw.iter().map(str::to_string));
        grid.add_row(cells);
    }

    Some(grid.render())
}

/// Page through the table until the user answers anything but "yes".
/// Returns the number of rows shown.
pub fn display_raw_data<R, W>(
    console: &mut Console<R, W>,
    table: &TripTable,
    page_size: usize,
) -> AppResult<usize>
where
    R: BufRead,
    W: Write,
{
    let prompt = raw_data_prompt(page_size);
    let mut cursor = 0;
    let mut shown = 0;

    while console.confirm(&prompt)? {
        if let Some(page) = render_page(table, cursor, page_size) {
            write!(console.output(), "\n{page}")?;
            shown += table.page(cursor, page_size).len();
        }
        cursor += page_size;
    }

    Ok(shown)
}
