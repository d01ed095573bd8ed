use log::debug;

use crate::model::*;

/// Combines the outcomes of each member with the descriptions of the votes.
///
/// Each entry has exactly one vote per descriptor, in the order of the
/// descriptors. A vote missing for a member is recorded with the
/// `VoteOutcome::missing()` sentinel.
pub fn join_aggregate(votes: &[VoteDescriptor], members: &[MemberRecord]) -> Vec<AggregateEntry> {
    members
        .iter()
        .map(|member| {
            let member_votes: Vec<MemberVote> = votes
                .iter()
                .map(|vote| {
                    let outcome = match member.outcomes.get(&vote.id) {
                        Some(o) => o.clone(),
                        None => {
                            debug!(
                                "join_aggregate: no outcome for vote {} of {}",
                                vote.id, member.name
                            );
                            VoteOutcome::missing()
                        }
                    };
                    MemberVote {
                        label: vote.subject.clone(),
                        outcome,
                        date: vote.timestamp,
                    }
                })
                .collect();
            AggregateEntry {
                number: member.number,
                name: member.name.clone(),
                party: member.party.clone(),
                votes: member_votes,
            }
        })
        .collect()
}
