//! Typed loading of GSC/GA4 export files.
//!
//! `.json` files hold an array of rows; anything else is read as CSV with a
//! header row using the same camelCase column names as the JSON fields.
//! Missing columns and blank cells read as zero for counters, while blank
//! `ctr`/`position` cells stay absent.

use crate::error::{SearchlightError, SlResult};
use crate::rolling::DailyValue;
use crate::stats::{PageDailyStats, PageEngagementStats, PageSearchStats};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

pub fn load_search_stats<P: AsRef<Path>>(path: P) -> SlResult<Vec<PageSearchStats>> {
    load_rows(path)
}

pub fn load_engagement_stats<P: AsRef<Path>>(path: P) -> SlResult<Vec<PageEngagementStats>> {
    load_rows(path)
}

pub fn load_page_daily<P: AsRef<Path>>(path: P) -> SlResult<Vec<PageDailyStats>> {
    load_rows(path)
}

pub fn load_daily_values<P: AsRef<Path>>(path: P) -> SlResult<Vec<DailyValue>> {
    load_rows(path)
}

pub fn load_rows<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> SlResult<Vec<T>> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let rows: Vec<T> = if is_json {
        serde_json::from_reader(BufReader::new(file))?
    } else {
        rows_from_csv(file)?
    };

    debug!("Loaded {} rows from {:?}", rows.len(), path);
    Ok(rows)
}

pub fn rows_from_csv<T: DeserializeOwned, R: Read>(reader: R) -> SlResult<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (line, record) in rdr.deserialize().enumerate() {
        let row: T = record.map_err(|e| {
            SearchlightError::Validation(format!("Row {}: {}", line + 1, e))
        })?;
        rows.push(row);
    }
    Ok(rows)
}
