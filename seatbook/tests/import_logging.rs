//! Log output of an import.
//!
//! Kept in its own test binary: the `log` backend is process-wide, so no
//! other test may log while the records are counted.

mod common;

use std::io::Cursor;
use std::sync::{Mutex, PoisonError};

use common::TempStore;
use log::{Level, LevelFilter, Log, Metadata, Record};

struct RecordingLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl RecordingLogger {
    fn take(&self) -> Vec<(Level, String)> {
        std::mem::take(&mut *self.records.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Log for RecordingLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: RecordingLogger = RecordingLogger {
    records: Mutex::new(Vec::new()),
};

#[test]
fn test_import_of_one_bad_line_logs_one_warning() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let env = TempStore::new();
    LOGGER.take();

    let input = "\
10,Abe,2030-04-01T19:00:00,2,A1
11,Baba,2030-04-01T19:00:00,2,A2
abc,Chiba,2030-04-01T19:00:00,2,A3
12,Doi,2030-04-01T19:00:00,2,A4
";
    let report = env.store.import(Cursor::new(input)).unwrap();
    assert_eq!(report.imported_count(), 3);
    assert_eq!(env.store.len(), 3);

    let warnings: Vec<String> = LOGGER
        .take()
        .into_iter()
        .filter(|(level, _)| *level == Level::Warn)
        .map(|(_, message)| message)
        .collect();

    assert_eq!(warnings.len(), 1, "warnings: {warnings:?}");
    assert!(warnings[0].contains("line 3"));
}
