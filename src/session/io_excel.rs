use calamine::{open_workbook_auto, DataType, Reader};

use crate::session::*;

/// Converts the first worksheet of a workbook (xls, xlsx, ods) to rows of text.
pub fn read_workbook_rows(path: &Path) -> SessionResult<Vec<Vec<String>>> {
    let p = display_path(path);
    debug!("read_workbook_rows: path: {:?}", &p);
    let mut workbook = open_workbook_auto(path).context(OpeningExcelSnafu { path: p.clone() })?;
    let wrange = workbook
        .worksheet_range_at(0)
        .context(EmptyExcelSnafu { path: p.clone() })?
        .context(OpeningExcelSnafu { path: p.clone() })?;

    let res: Vec<Vec<String>> = wrange
        .rows()
        .map(|row| row.iter().map(cell_to_text).collect())
        .collect();
    debug!("read_workbook_rows: {} rows in {:?}", res.len(), &p);
    if res.is_empty() {
        return EmptySheetSnafu { path: p }.fail();
    }
    Ok(res)
}

/// The text of a cell, as it would appear in a CSV export.
///
/// Whole numbers are written without decimals, so that the vote numbers of the
/// headers read as integers.
pub fn cell_to_text(cell: &DataType) -> String {
    match cell {
        DataType::String(s) => s.clone(),
        DataType::Empty => "".to_string(),
        DataType::Int(i) => i.to_string(),
        DataType::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => (*f as i64).to_string(),
        DataType::Float(f) => f.to_string(),
        DataType::Bool(b) => b.to_string(),
        other => {
            warn!("cell_to_text: unexpected cell {:?}", other);
            format!("{:?}", other)
        }
    }
}
