use log::{debug, error, info, warn};

use roll_call::*;
use snafu::{prelude::*, Snafu};

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use text_diff::print_diff;

use crate::args::Args;
use crate::session::config_reader::*;
use crate::session::io_common::*;
use crate::session::stenogram::*;
use crate::session::storage::*;

pub mod config_reader;
pub mod io_common;
pub mod io_csv;
pub mod io_excel;
pub mod stenogram;
pub mod storage;

#[derive(Debug, Snafu)]
pub enum SessionError {
    #[snafu(display("Error opening workbook {path}"))]
    OpeningExcel {
        source: calamine::Error,
        path: String,
    },
    #[snafu(display("Workbook {path} has no worksheet"))]
    EmptyExcel { path: String },
    #[snafu(display("Error opening CSV file {path}"))]
    OpeningCsv { source: csv::Error, path: String },
    #[snafu(display("Error writing CSV file {path}"))]
    WritingCsv { source: csv::Error, path: String },
    #[snafu(display("Sheet {path} is empty"))]
    EmptySheet { path: String },
    #[snafu(display("Error reading {path}"))]
    ReadingFile {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error writing {path}"))]
    WritingFile {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing JSON"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("Cannot read a column index from {value}"))]
    ParsingColumnIndex { value: String },
    #[snafu(display("Missing attachment '{name}' in {path}"))]
    MissingAttachment { name: String, path: String },
    #[snafu(display("No transcript description in {path}"))]
    MissingStenogram { path: String },
    #[snafu(display("Cannot extract the votes of {path}"))]
    Extraction {
        source: RollCallError,
        path: String,
    },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type SessionResult<T> = Result<T, SessionError>;

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
enum Stage {
    Extract,
    Transform,
    All,
}

impl Stage {
    fn from_arg(arg: Option<&str>) -> SessionResult<Stage> {
        match arg {
            None | Some("all") => Ok(Stage::All),
            Some("extract") => Ok(Stage::Extract),
            Some("transform") => Ok(Stage::Transform),
            Some(x) => whatever!("Unknown stage {:?}: expected extract, transform or all", x),
        }
    }

    fn extracts(&self) -> bool {
        matches!(self, Stage::Extract | Stage::All)
    }

    fn transforms(&self) -> bool {
        matches!(self, Stage::Transform | Stage::All)
    }
}

/// One member in the aggregate files. The fields are written in declaration
/// order.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct AggregateRecord {
    pub number: i64,
    pub name: String,
    pub party: String,
    pub votes: Vec<VoteRecord>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct VoteRecord {
    pub label: String,
    pub vote: String,
    pub date: String,
}

/// Converts the voting records to the layout of the aggregate files.
pub fn aggregate_records(entries: &[AggregateEntry]) -> Vec<AggregateRecord> {
    entries
        .iter()
        .map(|entry| AggregateRecord {
            number: entry.number,
            name: entry.name.clone(),
            party: entry.party.clone(),
            votes: entry
                .votes
                .iter()
                .map(|v| VoteRecord {
                    label: v.label.clone(),
                    vote: v.outcome.to_string(),
                    date: v.date.format(AGGREGATE_DATE_FORMAT).to_string(),
                })
                .collect(),
        })
        .collect()
}

/// Converts the roll-call attachments of the session in `session_dir` to CSV sheets.
pub fn extract_session(
    source: &dyn SheetSource,
    store: &dyn RecordStore,
    config: &RollCallConfig,
    session_dir: &Path,
) -> SessionResult<()> {
    let stenograms = find_stenograms(session_dir, config)?;
    let stenogram_path = match stenograms.as_slice() {
        [] => {
            return MissingStenogramSnafu {
                path: display_path(session_dir),
            }
            .fail()
        }
        [p] => p,
        [p, ..] => {
            warn!(
                "extract_session: {} transcripts in {:?}, using {:?}",
                stenograms.len(),
                session_dir,
                p
            );
            p
        }
    };
    let stenogram = read_stenogram(source, stenogram_path)?;
    info!(
        "extract_session: id: {} date: {} title: {:?}",
        stenogram.id, stenogram.date, stenogram.title
    );
    let attachments = locate_attachments(&stenogram, stenogram_path, config)?;

    let group_rows = source.fetch_sheet(&attachments.group)?;
    store.write_rows(session_dir, &config.group_file_name(), &group_rows)?;
    let individual_rows = source.fetch_sheet(&attachments.individual)?;
    store.write_rows(session_dir, &config.individual_file_name(), &individual_rows)?;
    Ok(())
}

/// Builds the voting records of the session in `session_dir` from its CSV sheets and stores them.
pub fn transform_session(
    store: &dyn RecordStore,
    config: &RollCallConfig,
    session_dir: &Path,
) -> SessionResult<Vec<AggregateRecord>> {
    let individual_rows = store.read(session_dir, &config.individual_file_name())?;
    let group_rows = store.read(session_dir, &config.group_file_name())?;
    let descriptor_column = config.descriptor_column()?;

    let entries = process_session(&group_rows, &individual_rows, descriptor_column).context(
        ExtractionSnafu {
            path: display_path(session_dir),
        },
    )?;
    debug!("transform_session: {} records", entries.len());

    let records = aggregate_records(&entries);
    let p = store.store(session_dir, &config.aggregate_file_name(), &records)?;
    info!("transform_session: wrote {:?}", p);
    Ok(records)
}

fn check_reference(reference_path: &str, records: &[AggregateRecord]) -> SessionResult<()> {
    let contents = fs::read_to_string(reference_path).context(ReadingFileSnafu {
        path: reference_path,
    })?;
    let reference: Vec<AggregateRecord> =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    let pretty_reference = to_tab_indented_string(&reference)?;
    let pretty_js = to_tab_indented_string(records)?;
    if pretty_reference != pretty_js {
        warn!("Found differences with the reference file");
        print_diff(pretty_reference.as_str(), pretty_js.as_str(), "\n");
        whatever!("Difference detected between the voting records and the reference file")
    }
    info!("check_reference: identical to {:?}", reference_path);
    Ok(())
}

fn write_output(out: &str, records: &[AggregateRecord]) -> SessionResult<()> {
    let s = to_tab_indented_string(records)?;
    if out == "stdout" {
        print!("{}", s);
        Ok(())
    } else {
        fs::write(out, s).context(WritingFileSnafu { path: out })
    }
}

pub fn run(args: &Args) -> SessionResult<()> {
    let config = match &args.config {
        Some(p) => read_config(p)?,
        None => RollCallConfig::default(),
    };
    debug!("config: {:?}", config);
    let stage = Stage::from_arg(args.stage.as_deref())?;
    // Fail early on an invalid column setting.
    config.descriptor_column()?;

    let data_dir: PathBuf = match &args.data {
        Some(d) => PathBuf::from(d),
        None => PathBuf::from(config.data_directory()),
    };
    let session_dirs: Vec<PathBuf> = match &args.input {
        Some(input) => vec![PathBuf::from(input)],
        None => collect_session_dirs(&data_dir, &config)?,
    };
    if args.input.is_none() && (args.reference.is_some() || args.out.is_some()) {
        whatever!("--reference and --out require a session given with --input")
    }
    info!("run: {} sessions under {:?}", session_dirs.len(), data_dir);

    let source = LocalArchive::default();
    let store = FileStore::default();
    let mut failures: usize = 0;
    let mut last_records: Option<Vec<AggregateRecord>> = None;
    for dir in session_dirs.iter() {
        info!("run: processing {:?}", dir);
        if stage.extracts() {
            if let Err(e) = extract_session(&source, &store, &config, dir) {
                error!("run: failed to extract the sheets of {:?}: {}", dir, e);
                failures += 1;
                continue;
            }
        }
        if stage.transforms() {
            match transform_session(&store, &config, dir) {
                Ok(records) => last_records = Some(records),
                Err(e) => {
                    error!("run: failed to build the records of {:?}: {}", dir, e);
                    failures += 1;
                }
            }
        }
    }
    info!(
        "run: {} sessions, {} failures",
        session_dirs.len(),
        failures
    );

    if args.input.is_some() {
        if failures > 0 {
            whatever!("Failed to process {}", args.input.clone().unwrap_or_default())
        }
        if let Some(records) = last_records {
            if let Some(out) = &args.out {
                write_output(out, &records)?;
            }
            if let Some(reference_path) = &args.reference {
                check_reference(reference_path, &records)?;
            }
        }
    }
    Ok(())
}
