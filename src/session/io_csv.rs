// Primitives for reading and writing CSV sheets.

use crate::session::*;

/// Reads all the rows of a CSV file, header included.
///
/// The rows may have different lengths: checking them is left to the
/// roll-call parsers.
pub fn read_csv_rows(path: &Path) -> SessionResult<Vec<Vec<String>>> {
    let p = display_path(path);
    let rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .context(OpeningCsvSnafu { path: p.clone() })?;
    let mut res: Vec<Vec<String>> = Vec::new();
    for (idx, line_r) in rdr.into_records().enumerate() {
        let line = line_r.context(OpeningCsvSnafu { path: p.clone() })?;
        debug!("read_csv_rows: lineno: {:?} row: {:?}", idx + 1, &line);
        res.push(line.iter().map(|s| s.to_string()).collect());
    }
    if res.is_empty() {
        return EmptySheetSnafu { path: p }.fail();
    }
    Ok(res)
}

pub fn write_csv_rows(path: &Path, rows: &[Vec<String>]) -> SessionResult<()> {
    let p = display_path(path);
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .context(WritingCsvSnafu { path: p.clone() })?;
    for row in rows {
        wtr.write_record(row)
            .context(WritingCsvSnafu { path: p.clone() })?;
    }
    wtr.flush().context(WritingFileSnafu { path: p })?;
    Ok(())
}
