// 📄 Row Pager - Show raw trips five at a time

use crate::console::Console;
use crate::table::{TripRecord, TripTable};
use anyhow::Result;
use std::io::{BufRead, Write};

pub const PAGE_SIZE: usize = 5;

pub const FIRST_PAGE_PROMPT: &str = "\nWould you like to view the first 5 rows of data? Enter yes or no: ";
pub const NEXT_PAGE_PROMPT: &str = "\nWould you like to view the next 5 rows of data? Enter yes or no: ";

/// Pager - Cursor over a table in fixed-size windows
#[derive(Debug, Clone)]
pub struct Pager {
    offset: usize,
    page_size: usize,
}

impl Pager {
    pub fn new() -> Self {
        Pager {
            offset: 0,
            page_size: PAGE_SIZE,
        }
    }

    /// Records in `[offset, offset + page_size)`, then advance
    ///
    /// Past the end of the table this is an empty slice, not an error.
    pub fn next_window<'t>(&mut self, table: &'t TripTable) -> &'t [TripRecord] {
        let records = table.records();
        let start = self.offset.min(records.len());
        let end = self.offset.saturating_add(self.page_size).min(records.len());
        self.offset = self.offset.saturating_add(self.page_size);
        &records[start..end]
    }
}

impl Default for Pager {
    fn default() -> Self {
        Pager::new()
    }
}

/// Offer raw rows until the user stops answering "yes"
///
/// Returns how many records were shown.
pub fn page<R: BufRead, W: Write>(console: &mut Console<R, W>, table: &TripTable) -> Result<usize> {
    let mut pager = Pager::new();
    let mut shown = 0;
    let mut message = FIRST_PAGE_PROMPT;

    while console.confirm(message)? {
        let window = pager.next_window(table);
        console.write_raw(&table.render(window))?;
        shown += window.len();
        message = NEXT_PAGE_PROMPT;
    }

    Ok(shown)
}
