use crate::session::*;

use serde::{Deserialize, Serialize};
use serde_json::Value as JSValue;

use roll_call::DEFAULT_DESCRIPTOR_COLUMN;

/// The settings of a run. All of them are optional.
#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct RollCallConfig {
    #[serde(rename = "dataDirectory")]
    pub data_directory: Option<String>,
    /// The column of the group sheet with the vote descriptions: a number
    /// starting at 1 or an Excel-style letter.
    #[serde(rename = "descriptorColumnIndex")]
    pub descriptor_column_index: Option<JSValue>,
    #[serde(rename = "individualAttachmentName")]
    pub individual_attachment_name: Option<String>,
    #[serde(rename = "groupAttachmentName")]
    pub group_attachment_name: Option<String>,
    #[serde(rename = "attachmentType")]
    pub attachment_type: Option<String>,
    #[serde(rename = "groupFileName")]
    pub group_file_name: Option<String>,
    #[serde(rename = "individualFileName")]
    pub individual_file_name: Option<String>,
    #[serde(rename = "aggregateFileName")]
    pub aggregate_file_name: Option<String>,
}

impl RollCallConfig {
    pub fn data_directory(&self) -> String {
        self.data_directory
            .clone()
            .unwrap_or_else(|| "data/".to_string())
    }

    /// The 0-based index of the descriptor column.
    pub fn descriptor_column(&self) -> SessionResult<usize> {
        match &self.descriptor_column_index {
            None => Ok(DEFAULT_DESCRIPTOR_COLUMN),
            x => {
                let col = read_js_int(x)?;
                // The index starts at 1 to respect most conventions in the excel world
                if col == 0 {
                    return ParsingColumnIndexSnafu { value: "0" }.fail();
                }
                Ok(col - 1)
            }
        }
    }

    pub fn individual_attachment_name(&self) -> String {
        self.individual_attachment_name
            .clone()
            .unwrap_or_else(|| "Поименно гласуване".to_string())
    }

    pub fn group_attachment_name(&self) -> String {
        self.group_attachment_name
            .clone()
            .unwrap_or_else(|| "Гласуване по парламентарни групи".to_string())
    }

    pub fn attachment_type(&self) -> String {
        self.attachment_type
            .clone()
            .unwrap_or_else(|| "xls".to_string())
    }

    pub fn group_file_name(&self) -> String {
        self.group_file_name
            .clone()
            .unwrap_or_else(|| "group_vote.csv".to_string())
    }

    pub fn individual_file_name(&self) -> String {
        self.individual_file_name
            .clone()
            .unwrap_or_else(|| "individual_vote.csv".to_string())
    }

    pub fn aggregate_file_name(&self) -> String {
        self.aggregate_file_name
            .clone()
            .unwrap_or_else(|| "aggregate_vote.json".to_string())
    }
}

pub fn read_config(path: &str) -> SessionResult<RollCallConfig> {
    let contents = fs::read_to_string(path).context(ReadingFileSnafu { path })?;
    let config: RollCallConfig =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    info!("read_config: {:?}", config);
    Ok(config)
}

// Reads a 1-based column index.
fn read_js_int(x: &Option<JSValue>) -> SessionResult<usize> {
    match x {
        Some(JSValue::Number(n)) => n.as_u64().map(|x| x as usize).context(
            ParsingColumnIndexSnafu {
                value: n.to_string(),
            },
        ),
        // Excel-style columns: A is 1, Z is 26, AA is 27
        Some(JSValue::String(s)) if !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic()) => s
            .to_ascii_lowercase()
            .chars()
            .try_fold(0usize, |acc, c| {
                acc.checked_mul(26)?
                    .checked_add(c as usize - 'a' as usize + 1)
            })
            .context(ParsingColumnIndexSnafu { value: s.clone() }),
        Some(JSValue::String(s)) => s
            .parse::<usize>()
            .ok()
            .context(ParsingColumnIndexSnafu { value: s.clone() }),
        x => None.context(ParsingColumnIndexSnafu {
            value: format!("{:?}", x),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RollCallConfig::default();
        assert_eq!(config.data_directory(), "data/");
        assert_eq!(config.descriptor_column().unwrap(), 1);
        assert_eq!(config.group_file_name(), "group_vote.csv");
        assert_eq!(config.individual_file_name(), "individual_vote.csv");
        assert_eq!(config.aggregate_file_name(), "aggregate_vote.json");
        assert_eq!(config.attachment_type(), "xls");
    }

    #[test]
    fn parse_config() {
        let config: RollCallConfig = serde_json::from_str(
            r#"{"dataDirectory": "/srv/archive", "descriptorColumnIndex": 3, "aggregateFileName": "votes.json"}"#,
        )
        .unwrap();
        assert_eq!(config.data_directory(), "/srv/archive");
        assert_eq!(config.descriptor_column().unwrap(), 2);
        assert_eq!(config.aggregate_file_name(), "votes.json");
        assert_eq!(config.group_file_name(), "group_vote.csv");
    }

    #[test]
    fn column_letters() {
        let column = |v: JSValue| RollCallConfig {
            descriptor_column_index: Some(v),
            ..Default::default()
        }
        .descriptor_column();
        assert_eq!(column(JSValue::from("B")).unwrap(), 1);
        assert_eq!(column(JSValue::from("aa")).unwrap(), 26);
        assert_eq!(column(JSValue::from("4")).unwrap(), 3);
        assert!(column(JSValue::from(0)).is_err());
        assert!(column(JSValue::from("B2")).is_err());
        assert!(column(JSValue::from(true)).is_err());
        assert_eq!(column(JSValue::from("ZZ")).unwrap(), 701);
        match column(JSValue::from("ZZZZZZZZZZZZZZZZ")) {
            Err(SessionError::ParsingColumnIndex { value }) => {
                assert_eq!(value, "ZZZZZZZZZZZZZZZZ")
            }
            x => panic!("unexpected result {:?}", x),
        }
    }
}
