// ********* Input data structures ***********

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::Display;

use chrono::NaiveDateTime;

/// The number of a vote within one session.
///
/// It is only used to join the per-member outcomes with the vote descriptors
/// and is never displayed.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub struct VoteId(pub u32);

impl Display for VoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a member did for a single vote.
///
/// The closed set follows the vocabulary of the roll-call sheets. Anything
/// else is kept in `Unknown` with the original token, so that a change in the
/// source format shows up in the output instead of disappearing.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub enum VoteOutcome {
    For,
    Against,
    Abstain,
    /// The member was in the room and did not vote.
    NoVote,
    /// Quorum check: the member is present.
    Present,
    /// Quorum check: counted as absent in the per-group tallies, although the
    /// member card was registered. The exact meaning is not documented.
    Registered,
    /// Quorum check: the member is absent.
    Absent,
    /// A token outside of the known vocabulary. The empty token is used when
    /// a vote has no matching column for a member.
    Unknown(String),
}

impl VoteOutcome {
    /// The sentinel used when a member has no outcome for a vote.
    pub fn missing() -> VoteOutcome {
        VoteOutcome::Unknown(String::new())
    }
}

impl Display for VoteOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VoteOutcome::For => write!(f, "for"),
            VoteOutcome::Against => write!(f, "against"),
            VoteOutcome::Abstain => write!(f, "abstain"),
            VoteOutcome::NoVote => write!(f, "no-vote"),
            VoteOutcome::Present => write!(f, "present"),
            VoteOutcome::Registered => write!(f, "registered"),
            VoteOutcome::Absent => write!(f, "absent"),
            VoteOutcome::Unknown(token) => write!(f, "unknown: {}", token),
        }
    }
}

/// A single vote of a session, as described in the group sheet.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct VoteDescriptor {
    pub id: VoteId,
    /// The kind of vote as written in the sheet (a regular vote, a quorum
    /// registration, ...).
    pub kind: String,
    pub timestamp: NaiveDateTime,
    /// What was voted on.
    pub subject: String,
}

/// One row of the individual sheet.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct MemberRecord {
    pub number: i64,
    pub name: String,
    pub party: String,
    pub outcomes: BTreeMap<VoteId, VoteOutcome>,
}

// ******** Output data structures *********

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct MemberVote {
    pub label: String,
    pub outcome: VoteOutcome,
    pub date: NaiveDateTime,
}

/// The voting record of one member for a whole session.
///
/// `votes` follows the order of the vote descriptors.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct AggregateEntry {
    pub number: i64,
    pub name: String,
    pub party: String,
    pub votes: Vec<MemberVote>,
}

/// Errors that prevent a sheet from being interpreted.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum RollCallError {
    /// The text looks like a vote descriptor but one of its parts is invalid.
    MalformedDescriptor { text: String, reason: String },
    /// A row does not have enough cells for the columns that must be read.
    /// `row` is the 0-based index of the row in the sheet.
    MalformedSheet {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The header of the individual sheet has no column for the first vote,
    /// or not enough columns before it for the member details.
    InsufficientColumns { first_vote_column: Option<usize> },
    /// Two vote descriptors share the same number.
    DuplicateVoteIdentity { id: VoteId },
}

impl Error for RollCallError {}

impl Display for RollCallError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RollCallError::MalformedDescriptor { text, reason } => {
                write!(f, "malformed vote descriptor {:?}: {}", text, reason)
            }
            RollCallError::MalformedSheet {
                row,
                expected,
                found,
            } => write!(
                f,
                "malformed sheet: row {} has {} cells, at least {} are required",
                row, found, expected
            ),
            RollCallError::InsufficientColumns {
                first_vote_column: Some(col),
            } => write!(
                f,
                "insufficient columns: the first vote is in column {}, member details need at least 4 columns",
                col
            ),
            RollCallError::InsufficientColumns {
                first_vote_column: None,
            } => write!(f, "insufficient columns: no column for the first vote"),
            RollCallError::DuplicateVoteIdentity { id } => {
                write!(f, "vote {} is described more than once", id)
            }
        }
    }
}

pub type RollCallResult<T> = Result<T, RollCallError>;
