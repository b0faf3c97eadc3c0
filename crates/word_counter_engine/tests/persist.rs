use std::fs;
use std::io::{self, Write};

use tempfile::TempDir;
use word_counter_engine::{PersistError, ReportDir};

fn entries(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn prepare_creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("reports").join("nested");
    assert!(!new_dir.exists());

    let dir = ReportDir::prepare(&new_dir).unwrap();
    assert!(new_dir.is_dir());
    assert_eq!(dir.path(), new_dir.as_path());
    assert!(entries(&new_dir).is_empty());
}

#[test]
fn prepare_rejects_a_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("index.html");
    fs::write(&file_path, "x").unwrap();

    let err = ReportDir::prepare(&file_path).unwrap_err();
    assert!(matches!(err, PersistError::NotADirectory(path) if path == file_path));
}

#[test]
fn rewriting_a_report_replaces_it() {
    let temp = TempDir::new().unwrap();
    let dir = ReportDir::prepare(temp.path()).unwrap();

    let first = dir.write("index.html", "<html>first</html>").unwrap();
    assert_eq!(first.file_name().unwrap(), "index.html");
    assert_eq!(fs::read_to_string(&first).unwrap(), "<html>first</html>");

    let second = dir.write("index.html", "<html>second</html>").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "<html>second</html>");
    assert_eq!(entries(temp.path()), vec!["index.html"]);
}

#[test]
fn failed_fill_keeps_previous_report() {
    let temp = TempDir::new().unwrap();
    let dir = ReportDir::prepare(temp.path()).unwrap();
    let target = dir.write("index.html", "<html>old</html>").unwrap();

    let result = dir.write_with("index.html", |out| {
        out.write_all(b"<html>half")?;
        Err(io::Error::new(io::ErrorKind::Other, "renderer gave up"))
    });

    assert!(matches!(result, Err(PersistError::Write { .. })));
    assert_eq!(fs::read_to_string(&target).unwrap(), "<html>old</html>");
    assert_eq!(entries(temp.path()), vec!["index.html"]);
}

#[test]
fn failed_rename_leaves_destination_untouched() {
    let temp = TempDir::new().unwrap();
    let dir = ReportDir::prepare(temp.path()).unwrap();
    // A non-empty directory cannot be replaced by a file.
    let blocked = temp.path().join("index.html");
    fs::create_dir(&blocked).unwrap();
    fs::write(blocked.join("keep.txt"), "old").unwrap();

    let result = dir.write("index.html", "<html>new</html>");

    assert!(matches!(result, Err(PersistError::Write { .. })));
    assert_eq!(fs::read_to_string(blocked.join("keep.txt")).unwrap(), "old");
    assert_eq!(entries(temp.path()), vec!["index.html"]);
}

#[test]
fn streamed_report_is_written_whole() {
    let temp = TempDir::new().unwrap();
    let dir = ReportDir::prepare(temp.path()).unwrap();

    let path = dir
        .write_with("counts.txt", |out| {
            for (word, count) in [("cat", 2), ("ran", 1)] {
                writeln!(out, "{word}\t{count}")?;
            }
            Ok(())
        })
        .unwrap();

    assert_eq!(fs::read_to_string(path).unwrap(), "cat\t2\nran\t1\n");
}
