use crate::session::io_csv::{read_csv_rows, write_csv_rows};
use crate::session::io_excel::read_workbook_rows;
use crate::session::*;

/// Gives access to the downloaded files of the archive.
pub trait SheetSource {
    /// The rows of a roll-call sheet, converted to text.
    fn fetch_sheet(&self, locator: &Path) -> SessionResult<Vec<Vec<String>>>;

    /// The raw content of a file.
    fn fetch_raw(&self, locator: &Path) -> SessionResult<Vec<u8>>;
}

/// Keeps the intermediate sheets and the voting records of each session.
pub trait RecordStore {
    /// Stores a voting record and returns where it was written.
    fn store(
        &self,
        session: &Path,
        name: &str,
        records: &[AggregateRecord],
    ) -> SessionResult<PathBuf>;

    fn read(&self, session: &Path, name: &str) -> SessionResult<Vec<Vec<String>>>;

    fn write_rows(&self, session: &Path, name: &str, rows: &[Vec<String>]) -> SessionResult<()>;
}

/// The archive as laid out on disk by the downloader.
///
/// Locators are paths as found while walking the archive: the session
/// directories already carry the location of the archive, so they are used as
/// given.
#[derive(Default)]
pub struct LocalArchive {}

impl SheetSource for LocalArchive {
    fn fetch_sheet(&self, locator: &Path) -> SessionResult<Vec<Vec<String>>> {
        info!("Attempting to read sheet {:?}", locator);
        let extension = locator
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => read_csv_rows(locator),
            "xls" | "xlsx" | "xlsm" | "xlsb" | "ods" => read_workbook_rows(locator),
            x => whatever!("Unsupported sheet format {:?} for {:?}", x, locator),
        }
    }

    fn fetch_raw(&self, locator: &Path) -> SessionResult<Vec<u8>> {
        fs::read(locator).context(ReadingFileSnafu {
            path: display_path(locator),
        })
    }
}

/// One directory per session, the files named after their content.
#[derive(Default)]
pub struct FileStore {}

impl RecordStore for FileStore {
    fn store(
        &self,
        session: &Path,
        name: &str,
        records: &[AggregateRecord],
    ) -> SessionResult<PathBuf> {
        fs::create_dir_all(session).context(WritingFileSnafu {
            path: display_path(session),
        })?;
        let p = session.join(name);
        let s = to_tab_indented_string(records)?;
        fs::write(&p, s).context(WritingFileSnafu {
            path: display_path(&p),
        })?;
        Ok(p)
    }

    fn read(&self, session: &Path, name: &str) -> SessionResult<Vec<Vec<String>>> {
        read_csv_rows(&session.join(name))
    }

    fn write_rows(&self, session: &Path, name: &str, rows: &[Vec<String>]) -> SessionResult<()> {
        fs::create_dir_all(session).context(WritingFileSnafu {
            path: display_path(session),
        })?;
        write_csv_rows(&session.join(name), rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_then_read() {
        let dir = std::env::temp_dir().join(format!("rollcall-store-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        let session = dir.join("2015").join("3").join("27");
        let store = FileStore::default();

        let rows = vec![vec!["0".to_string(), "Име".to_string()]];
        store.write_rows(&session, "individual_vote.csv", &rows).unwrap();
        assert_eq!(store.read(&session, "individual_vote.csv").unwrap(), rows);

        let records = vec![AggregateRecord {
            number: 1,
            name: "ИВАН ИВАНОВ".to_string(),
            party: "ГЕРБ".to_string(),
            votes: vec![],
        }];
        let p = store.store(&session, "aggregate_vote.json", &records).unwrap();
        assert_eq!(p, session.join("aggregate_vote.json"));
        let raw = LocalArchive::default().fetch_raw(&p).unwrap();
        assert_eq!(
            String::from_utf8(raw).unwrap(),
            "[\n\t{\n\t\t\"number\": 1,\n\t\t\"name\": \"ИВАН ИВАНОВ\",\n\t\t\"party\": \"ГЕРБ\",\n\t\t\"votes\": []\n\t}\n]\n"
        );
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn locators_used_as_given() {
        let name = format!("rollcall-locator-{}", std::process::id());
        let dir = Path::new(".").join(&name);
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("g.csv"), "a,b\n").unwrap();

        let archive = LocalArchive::default();
        let expected = vec![vec!["a".to_string(), "b".to_string()]];
        assert_eq!(archive.fetch_sheet(&dir.join("g.csv")).unwrap(), expected);
        assert_eq!(
            archive
                .fetch_sheet(&Path::new(&name).join("g.csv"))
                .unwrap(),
            expected
        );
        assert!(archive.fetch_sheet(&Path::new("data").join(&name).join("g.csv")).is_err());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn unsupported_format() {
        let archive = LocalArchive::default();
        assert!(archive.fetch_sheet(Path::new("7654.pdf")).is_err());
    }
}
