use crate::model::VoteOutcome;

// Cyrillic capitals. The Latin look-alikes are not valid tokens.
const PRESENT: &str = "\u{041F}"; // П
const ABSENT: &str = "\u{041E}"; // О
const REGISTERED: &str = "\u{0420}"; // Р

/// Reads the outcome of one cell of the individual sheet.
///
/// Every token maps to an outcome: tokens outside of the vocabulary are kept
/// in `VoteOutcome::Unknown`.
pub fn decode(token: &str) -> VoteOutcome {
    match token {
        "+" => VoteOutcome::For,
        "=" => VoteOutcome::Abstain,
        "-" => VoteOutcome::Against,
        "0" => VoteOutcome::NoVote,
        PRESENT => VoteOutcome::Present,
        ABSENT => VoteOutcome::Absent,
        REGISTERED => VoteOutcome::Registered,
        other => VoteOutcome::Unknown(other.to_string()),
    }
}

/// The token that `decode` maps to this outcome.
pub fn encode(outcome: &VoteOutcome) -> &str {
    match outcome {
        VoteOutcome::For => "+",
        VoteOutcome::Abstain => "=",
        VoteOutcome::Against => "-",
        VoteOutcome::NoVote => "0",
        VoteOutcome::Present => PRESENT,
        VoteOutcome::Absent => ABSENT,
        VoteOutcome::Registered => REGISTERED,
        VoteOutcome::Unknown(token) => token.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tokens() {
        assert_eq!(decode("+"), VoteOutcome::For);
        assert_eq!(decode("-"), VoteOutcome::Against);
        assert_eq!(decode("="), VoteOutcome::Abstain);
        assert_eq!(decode("0"), VoteOutcome::NoVote);
        assert_eq!(decode("П"), VoteOutcome::Present);
        assert_eq!(decode("О"), VoteOutcome::Absent);
        assert_eq!(decode("Р"), VoteOutcome::Registered);
    }

    #[test]
    fn unknown_tokens_are_kept() {
        assert_eq!(decode(""), VoteOutcome::Unknown("".to_string()));
        assert_eq!(decode("++"), VoteOutcome::Unknown("++".to_string()));
        // Latin letters that look like the Cyrillic tokens.
        assert_eq!(decode("P"), VoteOutcome::Unknown("P".to_string()));
        assert_eq!(decode("O"), VoteOutcome::Unknown("O".to_string()));
        assert_eq!(decode(" +"), VoteOutcome::Unknown(" +".to_string()));
    }

    #[test]
    fn encode_is_the_inverse_of_decode() {
        for token in ["+", "-", "=", "0", "П", "О", "Р", "x", ""] {
            assert_eq!(encode(&decode(token)), token);
        }
    }

    #[test]
    fn display_labels() {
        assert_eq!(decode("П").to_string(), "present");
        assert_eq!(decode("0").to_string(), "no-vote");
        assert_eq!(decode("?").to_string(), "unknown: ?");
        assert_eq!(VoteOutcome::missing().to_string(), "unknown: ");
    }
}
