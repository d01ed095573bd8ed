use crate::session::*;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Format of the vote dates in the aggregate files.
pub const AGGREGATE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn display_path(path: &Path) -> String {
    path.display().to_string()
}

/// The last segment of an attachment location. The archive uses both kinds of
/// separators.
pub fn simplify_file_name(location: &str) -> String {
    location
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(location)
        .to_string()
}

/// Serializes with tabs for the indentation, followed by a new line.
pub fn to_tab_indented_string<T: Serialize + ?Sized>(value: &T) -> SessionResult<String> {
    let mut buf: Vec<u8> = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    value.serialize(&mut ser).context(ParsingJsonSnafu {})?;
    buf.push(b'\n');
    String::from_utf8(buf).whatever_context("serialized JSON is not valid UTF-8")
}

fn is_stenogram(path: &Path, config: &RollCallConfig) -> bool {
    let is_json = path.extension().map(|e| e == "json").unwrap_or(false);
    let is_aggregate = path
        .file_name()
        .map(|n| n.to_string_lossy() == config.aggregate_file_name())
        .unwrap_or(false);
    is_json && !is_aggregate && path.is_file()
}

/// The transcript descriptions in a session directory, sorted by name.
pub fn find_stenograms(dir: &Path, config: &RollCallConfig) -> SessionResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).context(ReadingFileSnafu {
        path: display_path(dir),
    })?;
    let mut res: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let p = entry
            .context(ReadingFileSnafu {
                path: display_path(dir),
            })?
            .path();
        if is_stenogram(&p, config) {
            res.push(p);
        }
    }
    res.sort();
    Ok(res)
}

/// All the directories under `root` holding a transcript description, sorted.
pub fn collect_session_dirs(root: &Path, config: &RollCallConfig) -> SessionResult<Vec<PathBuf>> {
    let mut res: Vec<PathBuf> = Vec::new();
    let mut pending: Vec<PathBuf> = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let entries = fs::read_dir(&dir).context(ReadingFileSnafu {
            path: display_path(&dir),
        })?;
        let mut has_stenogram = false;
        for entry in entries {
            let p = entry
                .context(ReadingFileSnafu {
                    path: display_path(&dir),
                })?
                .path();
            if p.is_dir() {
                pending.push(p);
            } else if is_stenogram(&p, config) {
                has_stenogram = true;
            }
        }
        if has_stenogram {
            res.push(dir);
        }
    }
    res.sort();
    debug!("collect_session_dirs: {:?}", res);
    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn file_names() {
        assert_eq!(simplify_file_name("/pub/StenD/7654.xls"), "7654.xls");
        assert_eq!(simplify_file_name(r"data\2015\3\27\7654.xls"), "7654.xls");
        assert_eq!(simplify_file_name("7654.xls"), "7654.xls");
    }

    #[test]
    fn tab_indentation() {
        let s = to_tab_indented_string(&json!([{"name": "ИВАН"}])).unwrap();
        assert_eq!(s, "[\n\t{\n\t\t\"name\": \"ИВАН\"\n\t}\n]\n");
    }

    #[test]
    fn session_directories() {
        let root = std::env::temp_dir().join(format!("rollcall-collect-{}", std::process::id()));
        let _ = fs::remove_dir_all(&root);
        let day1 = root.join("2015").join("3").join("27");
        let day2 = root.join("2015").join("4").join("1");
        let empty = root.join("2015").join("4").join("2");
        for d in [&day1, &day2, &empty] {
            fs::create_dir_all(d).unwrap();
        }
        fs::write(day1.join("7654.json"), "{}").unwrap();
        fs::write(day2.join("7701.json"), "{}").unwrap();
        fs::write(day2.join("7701.xls"), "").unwrap();
        fs::write(empty.join("aggregate_vote.json"), "[]").unwrap();

        let config = RollCallConfig::default();
        let dirs = collect_session_dirs(&root, &config).unwrap();
        assert_eq!(dirs, vec![day1.clone(), day2.clone()]);
        assert_eq!(
            find_stenograms(&day2, &config).unwrap(),
            vec![day2.join("7701.json")]
        );
        assert!(find_stenograms(&empty, &config).unwrap().is_empty());
        let _ = fs::remove_dir_all(&root);
    }
}
