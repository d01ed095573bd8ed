use crate::session::*;

use serde::{Deserialize, Serialize};

/// The description of a plenary session transcript, as published by the
/// parliament archive.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct Stenogram {
    #[serde(rename = "Pl_Sten_id")]
    pub id: i64,
    /// In the format 2015-03-27
    #[serde(rename = "Pl_Sten_date")]
    pub date: String,
    #[serde(rename = "Pl_Sten_sub")]
    pub title: String,
    #[serde(rename = "Pl_Sten_body", default)]
    pub body: String,
    #[serde(rename = "files", default)]
    pub files: Vec<FileMeta>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct FileMeta {
    #[serde(rename = "Pl_StenDid")]
    pub id: i64,
    #[serde(rename = "Pl_StenDname")]
    pub name: String,
    #[serde(rename = "Pl_StenDfile")]
    pub location: String,
    #[serde(rename = "Pl_StenDtype")]
    pub file_type: String,
}

/// Where the two roll-call sheets of a session are stored.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct VoteAttachments {
    pub individual: PathBuf,
    pub group: PathBuf,
}

pub fn read_stenogram(source: &dyn SheetSource, path: &Path) -> SessionResult<Stenogram> {
    let data = source.fetch_raw(path)?;
    serde_json::from_slice(&data).context(ParsingJsonSnafu {})
}

/// Finds the roll-call sheets among the attachments of a transcript.
///
/// The attachments are stored next to the transcript description, under the
/// last segment of their location.
pub fn locate_attachments(
    stenogram: &Stenogram,
    stenogram_path: &Path,
    config: &RollCallConfig,
) -> SessionResult<VoteAttachments> {
    let base = stenogram_path.parent().unwrap_or_else(|| Path::new(""));
    let attachment_type = config.attachment_type();
    let individual_name = config.individual_attachment_name();
    let group_name = config.group_attachment_name();

    let mut individual: Option<PathBuf> = None;
    let mut group: Option<PathBuf> = None;
    for attachment in stenogram.files.iter() {
        if attachment.file_type != attachment_type {
            continue;
        }
        let loc = base.join(simplify_file_name(&attachment.location));
        if attachment.name == individual_name {
            individual = Some(loc);
        } else if attachment.name == group_name {
            group = Some(loc);
        }
    }

    let group = group.context(MissingAttachmentSnafu {
        name: group_name,
        path: display_path(stenogram_path),
    })?;
    let individual = individual.context(MissingAttachmentSnafu {
        name: individual_name,
        path: display_path(stenogram_path),
    })?;
    debug!(
        "locate_attachments: individual: {:?} group: {:?}",
        individual, group
    );
    Ok(VoteAttachments { individual, group })
}
