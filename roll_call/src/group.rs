use std::collections::HashSet;

use log::{debug, warn};

use crate::descriptor::parse_descriptor;
use crate::model::*;

/// The column of the group sheet holding the descriptor sentences.
pub const DEFAULT_DESCRIPTOR_COLUMN: usize = 1;

/// Reads the votes of a session from its group sheet.
///
/// Every row is tried: rows without a descriptor (headers, tallies) and rows
/// with an unreadable descriptor are skipped. A row with fewer than
/// `descriptor_column + 2` cells means that the sheet does not have the
/// expected shape and fails the whole sheet, as does a vote number seen
/// twice.
pub fn parse_group_roll(
    rows: &[Vec<String>],
    descriptor_column: usize,
) -> RollCallResult<Vec<VoteDescriptor>> {
    let min_cells = descriptor_column + 2;
    let mut seen: HashSet<VoteId> = HashSet::new();
    let mut res: Vec<VoteDescriptor> = Vec::new();
    for (idx, row) in rows.iter().enumerate() {
        if row.len() < min_cells {
            return Err(RollCallError::MalformedSheet {
                row: idx,
                expected: min_cells,
                found: row.len(),
            });
        }
        let cell = &row[descriptor_column];
        let descriptor = match parse_descriptor(cell) {
            Ok(Some(d)) => d,
            Ok(None) => {
                debug!("parse_group_roll: row {}: no descriptor", idx);
                continue;
            }
            Err(e) => {
                warn!("parse_group_roll: row {}: skipping: {}", idx, e);
                continue;
            }
        };
        if !seen.insert(descriptor.id) {
            return Err(RollCallError::DuplicateVoteIdentity { id: descriptor.id });
        }
        res.push(descriptor);
    }
    debug!("parse_group_roll: {} votes", res.len());
    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    fn descriptor_row(id: u32, minute: u32, subject: &str) -> Vec<String> {
        row(&[
            "",
            &format!(
                "Номер ({}) гласуване проведено на 27-03-2015 10:{:02} по тема {}",
                id, minute, subject
            ),
            "",
        ])
    }

    #[test]
    fn keeps_row_order() {
        let _ = env_logger::try_init();
        let rows = vec![
            row(&["", "Гласуване по парламентарни групи", ""]),
            descriptor_row(1, 0, "Регистрация"),
            row(&["ГЕРБ", "80", "12"]),
            descriptor_row(3, 10, "Данъци"),
            descriptor_row(2, 5, "Бюджет"),
        ];
        let votes = parse_group_roll(&rows, DEFAULT_DESCRIPTOR_COLUMN).unwrap();
        let ids: Vec<VoteId> = votes.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![VoteId(1), VoteId(3), VoteId(2)]);
        assert_eq!(votes[1].subject, "Данъци");
    }

    #[test]
    fn no_descriptors() {
        let rows = vec![row(&["a", "b", "c"]), row(&["", "", ""])];
        assert_eq!(parse_group_roll(&rows, DEFAULT_DESCRIPTOR_COLUMN), Ok(vec![]));
        assert_eq!(parse_group_roll(&[], DEFAULT_DESCRIPTOR_COLUMN), Ok(vec![]));
    }

    #[test]
    fn malformed_descriptors_are_skipped() {
        let rows = vec![
            row(&[
                "",
                "Номер (1) гласуване проведено на 99-99-2015 10:00 по тема Бюджет",
                "",
            ]),
            descriptor_row(2, 5, "Данъци"),
        ];
        let votes = parse_group_roll(&rows, DEFAULT_DESCRIPTOR_COLUMN).unwrap();
        assert_eq!(votes.len(), 1);
        assert_eq!(votes[0].id, VoteId(2));
    }

    #[test]
    fn short_rows() {
        let rows = vec![row(&["a", "b"]), row(&["c"])];
        assert_eq!(
            parse_group_roll(&rows, DEFAULT_DESCRIPTOR_COLUMN),
            Err(RollCallError::MalformedSheet {
                row: 0,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn duplicate_vote_number() {
        let rows = vec![descriptor_row(4, 0, "Бюджет"), descriptor_row(4, 5, "Данъци")];
        assert_eq!(
            parse_group_roll(&rows, DEFAULT_DESCRIPTOR_COLUMN),
            Err(RollCallError::DuplicateVoteIdentity { id: VoteId(4) })
        );
    }
}
