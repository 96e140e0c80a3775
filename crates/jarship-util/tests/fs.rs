use jarship_util::fs::{archive_path, ensure_dir, find_ancestor_with, walk_files};
use tempfile::TempDir;

#[test]
fn test_find_ancestor_with_nested() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("gradle.properties"), "").unwrap();
    let nested = tmp.path().join("a").join("b").join("c");
    std::fs::create_dir_all(&nested).unwrap();
    let result = find_ancestor_with(&nested, "gradle.properties");
    assert_eq!(result, Some(tmp.path().to_path_buf()));
}

#[test]
fn test_find_ancestor_with_not_found() {
    let tmp = TempDir::new().unwrap();
    let result = find_ancestor_with(tmp.path(), "NonExistent.file");
    assert_eq!(result, None);
}

#[test]
fn test_ensure_dir_creates_nested() {
    let tmp = TempDir::new().unwrap();
    let deep = tmp.path().join("x").join("y").join("z");
    assert!(!deep.exists());
    ensure_dir(&deep).unwrap();
    assert!(deep.is_dir());
}

#[test]
fn test_walk_files_sorted_and_recursive() {
    let tmp = TempDir::new().unwrap();
    let pkg = tmp.path().join("com").join("example");
    std::fs::create_dir_all(&pkg).unwrap();
    std::fs::write(pkg.join("B.java"), "").unwrap();
    std::fs::write(pkg.join("A.java"), "").unwrap();
    std::fs::write(tmp.path().join("top.txt"), "").unwrap();

    let files = walk_files(tmp.path()).unwrap();
    let rel: Vec<String> = files
        .iter()
        .map(|f| archive_path(tmp.path(), f).unwrap())
        .collect();
    assert_eq!(rel, vec!["com/example/A.java", "com/example/B.java", "top.txt"]);
}

#[test]
fn test_walk_files_missing_root_is_empty() {
    let tmp = TempDir::new().unwrap();
    let files = walk_files(&tmp.path().join("absent")).unwrap();
    assert!(files.is_empty());
}

#[test]
fn test_archive_path_outside_base() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(archive_path(&tmp.path().join("a"), tmp.path()), None);
}
