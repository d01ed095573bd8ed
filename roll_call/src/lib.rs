mod model;

pub mod aggregate;
pub mod codec;
pub mod descriptor;
pub mod group;
pub mod individual;
pub mod manual;

use log::info;

pub use crate::aggregate::join_aggregate;
pub use crate::descriptor::parse_descriptor;
pub use crate::group::{parse_group_roll, DEFAULT_DESCRIPTOR_COLUMN};
pub use crate::individual::{parse_individual_roll, SheetLayout};
pub use crate::model::*;

/// Builds the voting record of every member for one session.
///
/// Arguments:
/// * `group_rows` the rows of the group sheet, which describes the votes
/// * `individual_rows` the rows of the individual sheet, starting with its header
/// * `descriptor_column` the column of the group sheet with the vote descriptions
///
/// ```
/// use roll_call::*;
///
/// let cells = |r: &[&str]| r.iter().map(|s| s.to_string()).collect::<Vec<String>>();
/// let group = vec![cells(&[
///     "",
///     "Номер (1) гласуване проведено на 27-03-2015 10:05 по тема Бюджет",
///     "",
/// ])];
/// let individual = vec![
///     cells(&["", "", "", "", "", "1"]),
///     cells(&["1", "ИВАН ИВАНОВ", "", "1245.0", "ГЕРБ", "+"]),
/// ];
/// let entries = process_session(&group, &individual, DEFAULT_DESCRIPTOR_COLUMN)?;
/// assert_eq!(entries[0].votes[0].outcome, VoteOutcome::For);
/// # Ok::<(), RollCallError>(())
/// ```
pub fn process_session(
    group_rows: &[Vec<String>],
    individual_rows: &[Vec<String>],
    descriptor_column: usize,
) -> RollCallResult<Vec<AggregateEntry>> {
    let votes = parse_group_roll(group_rows, descriptor_column)?;
    let members = parse_individual_roll(individual_rows)?;
    info!(
        "process_session: {} votes, {} members",
        votes.len(),
        members.len()
    );
    Ok(join_aggregate(&votes, &members))
}
