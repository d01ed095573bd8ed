use std::sync::LazyLock;

use chrono::NaiveDateTime;
use log::{debug, warn};
use regex::Regex;

use crate::model::*;

/// Format of the timestamps embedded in the descriptors: `DD-MM-YYYY HH:MM`.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M";

// Номер (<id>) <kind> проведено на <DD-MM-YYYY HH:MM> по тема <subject>
static DESCRIPTOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"Номер \((?P<id>[0-9]+)\) (?P<kind>\p{L}+) проведено на (?P<date>[0-9\s:-]+) по тема (?P<subject>.*)",
    )
    .expect("DESCRIPTOR_PATTERN regex should compile")
});

/// Extracts the vote descriptor from the text of one cell.
///
/// Returns `Ok(None)` when the text does not describe a vote, which is the
/// case for headers, tallies and empty cells. Text with more than one
/// descriptor is also rejected this way. An error is only returned when the
/// descriptor is present but its number or its timestamp cannot be read.
pub fn parse_descriptor(text: &str) -> RollCallResult<Option<VoteDescriptor>> {
    let matches: Vec<regex::Captures> = DESCRIPTOR_PATTERN.captures_iter(text).take(2).collect();
    let caps = match matches.as_slice() {
        [] => return Ok(None),
        [caps] => caps,
        _ => {
            warn!(
                "parse_descriptor: several descriptors found, skipping: {:?}",
                text
            );
            return Ok(None);
        }
    };

    let id_s = &caps["id"];
    let id = id_s
        .parse::<u32>()
        .map_err(|e| RollCallError::MalformedDescriptor {
            text: text.to_string(),
            reason: format!("invalid vote number {:?}: {}", id_s, e),
        })?;

    let date_s = caps["date"].trim();
    let timestamp = NaiveDateTime::parse_from_str(date_s, TIMESTAMP_FORMAT).map_err(|e| {
        RollCallError::MalformedDescriptor {
            text: text.to_string(),
            reason: format!("invalid timestamp {:?}: {}", date_s, e),
        }
    })?;

    let descriptor = VoteDescriptor {
        id: VoteId(id),
        kind: caps["kind"].to_string(),
        timestamp,
        subject: caps["subject"].to_string(),
    };
    debug!("parse_descriptor: {:?}", descriptor);
    Ok(Some(descriptor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn well_formed_descriptor() {
        let text = "Номер (12) гласуване проведено на 27-03-2015 10:05 по тема Закон за държавния бюджет - първо четене";
        let d = parse_descriptor(text).unwrap().unwrap();
        assert_eq!(d.id, VoteId(12));
        assert_eq!(d.kind, "гласуване");
        assert_eq!(
            d.timestamp,
            NaiveDate::from_ymd_opt(2015, 3, 27)
                .unwrap()
                .and_hms_opt(10, 5, 0)
                .unwrap()
        );
        assert_eq!(d.subject, "Закон за държавния бюджет - първо четене");
        assert_eq!(
            d.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            "27-03-2015 10:05"
        );
    }

    #[test]
    fn descriptor_inside_a_longer_text() {
        let text = "Гласуване: Номер (1) регистрация проведено на 01-02-2019 09:00 по тема Регистрация";
        let d = parse_descriptor(text).unwrap().unwrap();
        assert_eq!(d.id, VoteId(1));
        assert_eq!(d.kind, "регистрация");
        assert_eq!(d.subject, "Регистрация");
    }

    #[test]
    fn no_descriptor() {
        assert_eq!(parse_descriptor(""), Ok(None));
        assert_eq!(parse_descriptor("ГЕРБ"), Ok(None));
        assert_eq!(
            parse_descriptor("Номер (x) гласуване проведено на 27-03-2015 10:05 по тема Бюджет"),
            Ok(None)
        );
    }

    #[test]
    fn several_descriptors_are_skipped() {
        let text = "Номер (1) гласуване проведено на 27-03-2015 10:05 по тема А\nНомер (2) гласуване проведено на 27-03-2015 10:07 по тема Б";
        assert_eq!(parse_descriptor(text), Ok(None));
    }

    #[test]
    fn invalid_timestamp() {
        let text = "Номер (3) гласуване проведено на 45-13-2015 10:05 по тема Бюджет";
        match parse_descriptor(text) {
            Err(RollCallError::MalformedDescriptor { .. }) => {}
            x => panic!("unexpected result {:?}", x),
        }
    }

    #[test]
    fn invalid_number() {
        let text = "Номер (99999999999) гласуване проведено на 27-03-2015 10:05 по тема Бюджет";
        match parse_descriptor(text) {
            Err(RollCallError::MalformedDescriptor { .. }) => {}
            x => panic!("unexpected result {:?}", x),
        }
    }
}
