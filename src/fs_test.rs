use super::mock::MockFs;
use super::*;
use tempfile::TempDir;

// ==================== RealFs tests ====================

#[test]
fn test_real_write_creates_parent_dirs() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("a").join("b").join("record.json");

    RealFs.write(&path, b"{}").unwrap();

    assert_eq!(RealFs.read(&path).unwrap(), b"{}");
    assert!(RealFs.is_dir(&temp.path().join("a").join("b")));
}

#[test]
fn test_real_write_overwrites_without_leaving_temp_files() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("record.json");

    RealFs.write(&path, b"first").unwrap();
    RealFs.write(&path, b"second").unwrap();

    assert_eq!(RealFs.read(&path).unwrap(), b"second");
    let entries = RealFs.read_dir(temp.path()).unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].is_file());
}

#[test]
fn test_real_remove_file_missing_is_ok() {
    let temp = TempDir::new().unwrap();
    assert!(RealFs.remove_file(&temp.path().join("nope")).is_ok());
}

#[test]
fn test_real_remove_file_rejects_directory() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("dir");
    std::fs::create_dir_all(&dir).unwrap();
    assert!(RealFs.remove_file(&dir).is_err());
}

#[test]
fn test_real_read_dir_reports_types() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("text")).unwrap();
    RealFs.write(&temp.path().join("file.json"), b"x").unwrap();

    let mut entries = RealFs.read_dir(temp.path()).unwrap();
    entries.sort_by(|a, b| a.path.cmp(&b.path));

    assert!(entries[0].is_file());
    assert!(entries[1].is_dir());
}

// ==================== MockFs tests ====================

#[test]
fn test_mock_write_registers_parent_dirs() {
    let fs = MockFs::new();
    fs.write(Path::new("/db/text/plain.json"), b"{}").unwrap();

    assert!(fs.is_dir(Path::new("/db/text")));
    assert!(fs.is_dir(Path::new("/db")));
    assert_eq!(fs.content("/db/text/plain.json"), Some("{}".to_string()));
}

#[test]
fn test_mock_read_dir_lists_direct_children_only() {
    let fs = MockFs::new();
    fs.add_dir("/db");
    fs.write(Path::new("/db/text/plain.json"), b"{}").unwrap();
    fs.add_file("/db/README", "hi");

    let entries = fs.read_dir(Path::new("/db")).unwrap();
    assert_eq!(entries.len(), 2);
}

#[test]
fn test_mock_read_dir_missing_is_err() {
    let fs = MockFs::new();
    assert!(fs.read_dir(Path::new("/missing")).is_err());
}
