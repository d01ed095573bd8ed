use std::collections::BTreeMap;

use log::{debug, error, warn};

use crate::codec;
use crate::model::*;

/// The member name is always in the second column.
pub const NAME_COLUMN: usize = 1;

/// The positions of the member details, derived from the column of the first
/// vote.
///
/// Example of a data row, where the first vote is the quorum registration:
///
/// ```text
/// 1,АДЛЕН ШУКРИ ШЕВКЕД,,1245.0,ДПС,П,П,+
/// ```
///
/// The party is just before the first vote and the member number two columns
/// before it.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct SheetLayout {
    pub first_vote_column: usize,
    pub number_column: usize,
    pub party_column: usize,
    pub name_column: usize,
    /// Column index and vote number, in column order.
    pub vote_columns: Vec<(usize, VoteId)>,
}

impl SheetLayout {
    /// Finds the layout from the header row.
    pub fn from_header(header: &[String]) -> RollCallResult<SheetLayout> {
        let numbered: Vec<(usize, i64)> = header
            .iter()
            .enumerate()
            .filter_map(|(idx, h)| h.trim().parse::<i64>().ok().map(|n| (idx, n)))
            // 0 is not a vote number
            .filter(|(_, n)| *n != 0)
            .collect();

        // The rightmost `1`: a row index to the left may also read 1.
        let first_vote_column = numbered
            .iter()
            .rev()
            .find(|(_, n)| *n == 1)
            .map(|(idx, _)| *idx);
        let first_vote_column = match first_vote_column {
            Some(col) if col > 3 => col,
            x => {
                return Err(RollCallError::InsufficientColumns {
                    first_vote_column: x,
                })
            }
        };

        let number_column = first_vote_column - 2;
        let party_column = first_vote_column - 1;
        let detail_columns = [number_column, party_column, NAME_COLUMN];

        let mut vote_columns: Vec<(usize, VoteId)> = Vec::new();
        for (idx, n) in numbered {
            if n < 0 {
                continue;
            }
            if detail_columns.contains(&idx) {
                debug!(
                    "SheetLayout: column {} has the numeric header {} but holds member details",
                    idx, n
                );
                continue;
            }
            match u32::try_from(n) {
                Ok(id) => {
                    if vote_columns.iter().any(|(_, other)| *other == VoteId(id)) {
                        warn!("SheetLayout: vote {} appears in several columns", id);
                    }
                    vote_columns.push((idx, VoteId(id)))
                }
                Err(_) => warn!("SheetLayout: column {}: vote number {} too large", idx, n),
            }
        }

        Ok(SheetLayout {
            first_vote_column,
            number_column,
            party_column,
            name_column: NAME_COLUMN,
            vote_columns,
        })
    }

    /// The number of cells a data row needs for all the columns to be read.
    pub fn min_cells(&self) -> usize {
        let last_vote = self
            .vote_columns
            .iter()
            .map(|(idx, _)| *idx)
            .max()
            .unwrap_or(0);
        last_vote.max(self.first_vote_column) + 1
    }
}

/// Reads the outcome of every vote for every member of the individual sheet.
///
/// The first row is the header. The sheet fails as a whole when the header
/// does not have the expected shape or when a data row is too short.
pub fn parse_individual_roll(rows: &[Vec<String>]) -> RollCallResult<Vec<MemberRecord>> {
    let header = rows.first().ok_or(RollCallError::InsufficientColumns {
        first_vote_column: None,
    })?;
    let layout = SheetLayout::from_header(header)?;
    debug!("parse_individual_roll: layout: {:?}", layout);
    let min_cells = layout.min_cells();

    let mut res: Vec<MemberRecord> = Vec::new();
    for (idx, row) in rows.iter().enumerate().skip(1) {
        if row.len() < min_cells {
            return Err(RollCallError::MalformedSheet {
                row: idx,
                expected: min_cells,
                found: row.len(),
            });
        }
        let name = row[layout.name_column].clone();
        let party = row[layout.party_column].clone();
        let number_s = row[layout.number_column].trim();
        // The numbers come as decimals from the spreadsheets (1245.0).
        let number = match number_s.parse::<f64>() {
            Ok(x) if x.is_finite() => x.trunc() as i64,
            x => {
                error!(
                    "parse_individual_roll: row {}: failed to read the number {:?} of {}: {:?}",
                    idx, number_s, name, x
                );
                0
            }
        };

        let outcomes: BTreeMap<VoteId, VoteOutcome> = layout
            .vote_columns
            .iter()
            .map(|(col, id)| (*id, codec::decode(&row[*col])))
            .collect();

        res.push(MemberRecord {
            number,
            name,
            party,
            outcomes,
        });
    }
    Ok(res)
}
