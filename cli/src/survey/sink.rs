// cli/src/survey/sink.rs
#![forbid(unsafe_code)]

use crate::survey::table::{ReportRow, TablePrinter};

pub trait SurveySink {
    /// Called on periodic cadence with a fully-prepared report row.
    fn on_report(&mut self, _row: &ReportRow) {}
}

/// Default: absolutely minimal overhead.
#[derive(Default)]
pub struct NoopSink;

impl SurveySink for NoopSink {}

/// Prints periodic rows to stdout.
pub struct TableSink {
    printer: TablePrinter,
}

impl TableSink {
    pub fn new(every_levels: u64, header_every_rows: u64) -> Self {
        Self {
            printer: TablePrinter::new(every_levels, header_every_rows),
        }
    }

    pub fn enabled(&self) -> bool {
        self.printer.enabled()
    }
}

impl SurveySink for TableSink {
    fn on_report(&mut self, row: &ReportRow) {
        self.printer.maybe_print(row);
    }
}
