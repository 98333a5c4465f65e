use baldu::data::EntryType;
use baldu::reader::FsReader;
use baldu::select::select_largest;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Counts every entry below `root` and sums their own sizes, independently of
/// the scanner.
fn walk_totals(root: &Path) -> (usize, u64) {
    let mut count = 0;
    let mut total = 0;
    for entry in WalkDir::new(root).min_depth(1).follow_links(false) {
        let entry = entry.expect("walk failed");
        count += 1;
        total += entry.metadata().expect("metadata failed").len();
    }
    (count, total)
}

fn create_test_directory_structure(dir: &Path, depth: usize, files_per_dir: usize) {
    if depth == 0 {
        return;
    }

    for i in 0..files_per_dir {
        let file_path = dir.join(format!("file_{}.txt", i));
        fs::write(&file_path, "x".repeat((i + 1) * 100 * depth)).unwrap();
    }

    for i in 0..3 {
        let subdir_path = dir.join(format!("subdir_{}", i));
        fs::create_dir_all(&subdir_path).unwrap();
        create_test_directory_structure(&subdir_path, depth - 1, files_per_dir);
    }
}

#[test]
fn test_three_files_with_tempdir() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root_path = temp_dir.path();

    fs::write(root_path.join("a"), vec![0u8; 10]).expect("Failed to write a");
    fs::write(root_path.join("b"), vec![0u8; 20]).expect("Failed to write b");
    fs::write(root_path.join("c"), vec![0u8; 70]).expect("Failed to write c");

    let selection = select_largest(root_path, 4, &FsReader).expect("selection failed");
    let entries = selection.entries();

    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0].path, root_path);
    assert_eq!(entries[0].size, 100);

    let files: HashSet<PathBuf> = entries[1..].iter().map(|e| e.path.clone()).collect();
    let expected: HashSet<PathBuf> = ["a", "b", "c"].iter().map(|n| root_path.join(n)).collect();
    assert_eq!(files, expected);
    assert!(entries[1..].iter().all(|e| e.entry_type == EntryType::File));
}

#[test]
fn test_unconstrained_budget_matches_full_walk() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root_path = temp_dir.path();
    create_test_directory_structure(root_path, 3, 2);

    let (count, total) = walk_totals(root_path);
    let selection = select_largest(root_path, count + 1, &FsReader).expect("selection failed");

    assert_eq!(selection.len(), count + 1);
    assert_eq!(selection.entries()[0].size, total);

    let selected: HashSet<PathBuf> = selection.entries().into_iter().map(|e| e.path).collect();
    for entry in WalkDir::new(root_path) {
        let entry = entry.unwrap();
        assert!(selected.contains(entry.path()), "{} missing", entry.path().display());
    }
}

#[test]
fn test_budget_respected_with_tempdir() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root_path = temp_dir.path();
    create_test_directory_structure(root_path, 3, 3);
    let (_, total) = walk_totals(root_path);

    for max in [1, 2, 3, 5, 8, 13, 21, 34] {
        let selection = select_largest(root_path, max, &FsReader).expect("selection failed");
        assert!(selection.len() <= max);
        // The root total is exact no matter how little was selected
        assert_eq!(selection.entries()[0].size, total);
    }
}

#[test]
fn test_selected_sizes_are_true_subtree_totals() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root_path = temp_dir.path();
    create_test_directory_structure(root_path, 3, 2);

    let selection = select_largest(root_path, 20, &FsReader).expect("selection failed");

    for entry in selection.entries().iter().skip(1) {
        let own = fs::symlink_metadata(&entry.path).unwrap().len();
        let (_, below) = walk_totals(&entry.path);
        let expected = match entry.entry_type {
            EntryType::Dir => own + below,
            EntryType::File => own,
        };
        assert_eq!(entry.size, expected, "{}", entry.path.display());
    }
}

#[cfg(unix)]
#[test]
fn test_symlink_cycle_is_not_followed() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root_path = temp_dir.path();
    let sub = root_path.join("sub");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("data.bin"), vec![0u8; 500]).unwrap();
    std::os::unix::fs::symlink(root_path, sub.join("loop")).unwrap();

    let (count, total) = walk_totals(root_path);
    let selection = select_largest(root_path, 100, &FsReader).expect("selection failed");

    assert_eq!(selection.len(), count + 1);
    assert_eq!(selection.entries()[0].size, total);
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_with_tempdir() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root_path = temp_dir.path();
    let locked = root_path.join("locked");
    let open = root_path.join("open");
    fs::create_dir(&locked).unwrap();
    fs::create_dir(&open).unwrap();
    fs::write(locked.join("secret"), vec![0u8; 300]).unwrap();
    fs::write(open.join("visible"), vec![0u8; 200]).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can still read the directory
    let really_locked = fs::read_dir(&locked).is_err();

    let selection = select_largest(root_path, 100, &FsReader).expect("selection failed");
    let entries = selection.entries();

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    let paths: HashSet<PathBuf> = entries.iter().map(|e| e.path.clone()).collect();
    assert!(paths.contains(&locked));
    assert!(paths.contains(&open));
    assert!(paths.contains(&open.join("visible")));

    if really_locked {
        let locked_entry = entries.iter().find(|e| e.path == locked).unwrap();
        let own = fs::symlink_metadata(&locked).unwrap().len();
        assert_eq!(locked_entry.size, own);
        assert!(!paths.contains(&locked.join("secret")));
    }
}

#[test]
fn test_root_that_is_a_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file = temp_dir.path().join("plain.txt");
    fs::write(&file, "not a directory").unwrap();

    let selection = select_largest(&file, 10, &FsReader).expect("selection failed");
    let entries = selection.entries();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].size, 0);
}
