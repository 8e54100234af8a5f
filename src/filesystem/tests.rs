// src/filesystem/tests.rs
//!
//! Tests for filesystem operations, search and permissions
//!

use super::*;
use std::fs;
use tempfile::TempDir;

// ============================================================================
// read_dir Tests
// ============================================================================

#[test]
fn test_read_dir_directories_first_then_alphabetical() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("b.txt"), b"hello").unwrap();
    fs::write(dir.path().join("A.txt"), b"").unwrap();
    fs::create_dir(dir.path().join("zeta")).unwrap();

    let entries = read_dir(dir.path()).unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["zeta", "A.txt", "b.txt"]);

    assert_eq!(entries[0].kind, EntryKind::Directory);
    assert_eq!(entries[0].size, None);
    assert_eq!(entries[2].kind, EntryKind::File);
    assert_eq!(entries[2].size, Some(5));
}

#[test]
fn test_read_dir_missing_path() {
    let dir = TempDir::new().unwrap();
    let result = read_dir(&dir.path().join("missing"));
    assert!(matches!(result, Err(FsError::NotFound { .. })));
}

#[test]
fn test_read_dir_on_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("file.txt");
    fs::write(&file, b"").unwrap();

    assert!(matches!(read_dir(&file), Err(FsError::NotADirectory { .. })));
}

// ============================================================================
// create_file / create_dir Tests
// ============================================================================

#[test]
fn test_create_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("new.txt");

    create_file(&file).unwrap();
    assert!(file.is_file());
    assert_eq!(fs::metadata(&file).unwrap().len(), 0);
}

#[test]
fn test_create_file_twice_keeps_content() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("notes.txt");
    fs::write(&file, b"keep me").unwrap();

    let result = create_file(&file);
    assert!(matches!(result, Err(FsError::AlreadyExists { .. })));
    assert_eq!(fs::read(&file).unwrap(), b"keep me");
}

#[test]
fn test_create_dir_and_collision() {
    let dir = TempDir::new().unwrap();
    let sub = dir.path().join("sub");

    create_dir(&sub).unwrap();
    assert!(sub.is_dir());
    assert!(matches!(create_dir(&sub), Err(FsError::AlreadyExists { .. })));
}

#[test]
fn test_create_dir_missing_parent_fails() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");

    assert!(matches!(
        create_dir(&nested),
        Err(FsError::OperationFailed { .. })
    ));
}

// ============================================================================
// copy / rename Tests
// ============================================================================

#[test]
fn test_copy_file() {
    let dir = TempDir::new().unwrap();
    let from = dir.path().join("a.txt");
    let to = dir.path().join("b.txt");
    fs::write(&from, b"payload").unwrap();

    copy(&from, &to).unwrap();
    assert_eq!(fs::read(&to).unwrap(), b"payload");
    assert!(from.exists());
}

#[test]
fn test_copy_directory_tree_then_remove_source() {
    let dir = TempDir::new().unwrap();
    let from = dir.path().join("src");
    fs::create_dir_all(from.join("nested")).unwrap();
    fs::write(from.join("top.txt"), b"top").unwrap();
    fs::write(from.join("nested").join("deep.txt"), b"deep").unwrap();
    let to = dir.path().join("dst");

    copy(&from, &to).unwrap();
    remove(&from).unwrap();

    assert!(!from.exists());
    assert_eq!(fs::read(to.join("top.txt")).unwrap(), b"top");
    assert_eq!(fs::read(to.join("nested").join("deep.txt")).unwrap(), b"deep");
    assert!(!to.join("src").exists());
}

#[test]
fn test_copy_refuses_existing_destination() {
    let dir = TempDir::new().unwrap();
    let from = dir.path().join("a.txt");
    let to = dir.path().join("b.txt");
    fs::write(&from, b"new").unwrap();
    fs::write(&to, b"old").unwrap();

    assert!(matches!(copy(&from, &to), Err(FsError::AlreadyExists { .. })));
    assert_eq!(fs::read(&from).unwrap(), b"new");
    assert_eq!(fs::read(&to).unwrap(), b"old");
}

#[test]
fn test_copy_missing_source() {
    let dir = TempDir::new().unwrap();
    let result = copy(&dir.path().join("nope"), &dir.path().join("b"));
    assert!(matches!(result, Err(FsError::NotFound { .. })));
}

#[test]
fn test_rename_moves_file() {
    let dir = TempDir::new().unwrap();
    let from = dir.path().join("old.txt");
    let to = dir.path().join("new.txt");
    fs::write(&from, b"x").unwrap();

    rename(&from, &to).unwrap();
    assert!(!from.exists());
    assert_eq!(fs::read(&to).unwrap(), b"x");
}

#[test]
fn test_rename_refuses_existing_destination() {
    let dir = TempDir::new().unwrap();
    let from = dir.path().join("a");
    let to = dir.path().join("b");
    fs::write(&from, b"a").unwrap();
    fs::write(&to, b"b").unwrap();

    assert!(matches!(rename(&from, &to), Err(FsError::AlreadyExists { .. })));
    assert_eq!(fs::read(&from).unwrap(), b"a");
}

// ============================================================================
// remove Tests
// ============================================================================

#[test]
fn test_remove_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("gone.txt");
    fs::write(&file, b"").unwrap();

    assert_eq!(remove(&file).unwrap(), Removal::File);
    assert!(!file.exists());
}

#[test]
fn test_remove_empty_directory_counts_zero() {
    let dir = TempDir::new().unwrap();
    let sub = dir.path().join("empty");
    fs::create_dir(&sub).unwrap();

    assert_eq!(remove(&sub).unwrap(), Removal::Directory { removed: 0 });
    assert!(!sub.exists());
}

#[test]
fn test_remove_directory_counts_recursive_entries() {
    let dir = TempDir::new().unwrap();
    let sub = dir.path().join("tree");
    fs::create_dir_all(sub.join("a").join("b")).unwrap();
    fs::write(sub.join("one.txt"), b"1").unwrap();
    fs::write(sub.join("a").join("two.txt"), b"2").unwrap();
    fs::write(sub.join("a").join("b").join("three.txt"), b"3").unwrap();

    // a, b, one.txt, two.txt, three.txt
    assert_eq!(remove(&sub).unwrap(), Removal::Directory { removed: 5 });
    assert!(!sub.exists());
}

#[cfg(unix)]
#[test]
fn test_remove_under_unreadable_parent_is_not_reported_missing() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let parent = dir.path().join("sealed");
    fs::create_dir(&parent).unwrap();
    let target = parent.join("inside.txt");
    fs::write(&target, b"").unwrap();
    fs::set_permissions(&parent, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can still stat through the parent; only check when denied
    let denied = fs::symlink_metadata(&target).is_err();
    let result = remove(&target);
    fs::set_permissions(&parent, fs::Permissions::from_mode(0o755)).unwrap();

    if denied {
        match result {
            Err(FsError::OperationFailed { reason }) => {
                assert!(reason.contains("inside.txt"), "reason was: {}", reason)
            }
            other => panic!("expected OperationFailed, got {:?}", other),
        }
        assert!(target.exists());
    } else {
        assert_eq!(result.unwrap(), Removal::File);
    }
}

#[cfg(unix)]
#[test]
fn test_remove_directory_unreadable_subtree_names_path() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let tree = dir.path().join("tree");
    let locked = tree.join("locked");
    fs::create_dir_all(&locked).unwrap();
    fs::write(locked.join("secret.txt"), b"").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    let denied = fs::read_dir(&locked).is_err();
    let result = remove(&tree);
    if tree.exists() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    }

    if denied {
        match result {
            Err(FsError::OperationFailed { reason }) => {
                assert!(reason.contains("locked"), "reason was: {}", reason);
                assert!(!reason.contains("unknown"));
            }
            other => panic!("expected OperationFailed, got {:?}", other),
        }
    } else {
        assert_eq!(result.unwrap(), Removal::Directory { removed: 2 });
    }
}

#[test]
fn test_remove_missing() {
    let dir = TempDir::new().unwrap();
    let result = remove(&dir.path().join("missing"));
    assert!(matches!(result, Err(FsError::NotFound { .. })));
}

// ============================================================================
// search Tests
// ============================================================================

fn search_fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("report.txt"), b"").unwrap();
    fs::write(dir.path().join("REPORT.csv"), b"").unwrap();
    fs::write(dir.path().join("image.png"), b"").unwrap();
    dir
}

#[test]
fn test_find_case_insensitive_filename_match() {
    let dir = search_fixture();

    let report = search::find(dir.path(), "report").unwrap();
    assert_eq!(report.match_count(), 2);
    assert!(report.matches.contains(&dir.path().join("report.txt")));
    assert!(report.matches.contains(&dir.path().join("REPORT.csv")));
    assert!(report.skipped.is_empty());
}

#[test]
fn test_find_descends_into_subdirectories() {
    let dir = search_fixture();
    let nested = dir.path().join("archive").join("2024");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("old_report.txt"), b"").unwrap();

    let report = search::find(dir.path(), "report").unwrap();
    assert_eq!(report.match_count(), 3);
    assert!(report.matches.contains(&nested.join("old_report.txt")));
}

#[test]
fn test_find_matches_filename_not_full_path() {
    let dir = TempDir::new().unwrap();
    let reports = dir.path().join("reports");
    fs::create_dir(&reports).unwrap();
    fs::write(reports.join("data.bin"), b"").unwrap();

    let report = search::find(dir.path(), "reports").unwrap();
    assert_eq!(report.matches, vec![reports]);
}

#[test]
fn test_find_anchored_pattern() {
    let dir = search_fixture();

    let report = search::find(dir.path(), r"\.png$").unwrap();
    assert_eq!(report.matches, vec![dir.path().join("image.png")]);
}

#[test]
fn test_find_invalid_pattern() {
    let dir = search_fixture();

    let result = search::find(dir.path(), "[unclosed");
    assert!(matches!(result, Err(FsError::InvalidArgument { .. })));
}

#[cfg(unix)]
#[test]
fn test_find_skips_unreadable_subtree() {
    use std::os::unix::fs::PermissionsExt;

    let dir = search_fixture();
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::write(locked.join("report_hidden.txt"), b"").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can still read the directory; only check when denied
    let denied = fs::read_dir(&locked).is_err();
    let report = search::find(dir.path(), "report").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    if denied {
        assert_eq!(report.match_count(), 2);
        assert_eq!(report.skipped.len(), 1);
        assert!(matches!(
            report.skipped[0],
            FsError::PermissionSkipped { .. }
        ));
    } else {
        assert_eq!(report.match_count(), 3);
    }
}

// ============================================================================
// PermissionTriad Tests
// ============================================================================

#[test]
fn test_triad_parse_and_symbolic() {
    let triad: PermissionTriad = "755".parse().unwrap();
    assert_eq!(triad.mode(), 0o755);
    assert_eq!(triad.symbolic(), "rwxr-xr-x");
    assert_eq!(triad.to_string(), "755");

    let triad: PermissionTriad = "644".parse().unwrap();
    assert_eq!(triad.symbolic(), "rw-r--r--");

    let triad: PermissionTriad = "000".parse().unwrap();
    assert_eq!(triad.symbolic(), "---------");
}

#[test]
fn test_triad_rejects_malformed() {
    for input in ["75", "7555", "abc", "789", "", "7 5", "-75"] {
        let result = input.parse::<PermissionTriad>();
        assert!(
            matches!(result, Err(FsError::InvalidArgument { .. })),
            "'{}' should be rejected",
            input
        );
    }
}

#[test]
fn test_triad_from_mode_ignores_file_type_bits() {
    let triad = PermissionTriad::from_mode(0o100_640);
    assert_eq!(triad, PermissionTriad { owner: 6, group: 4, other: 0 });
}

// ============================================================================
// stat / chmod Tests
// ============================================================================

#[test]
fn test_read_permissions_missing() {
    let dir = TempDir::new().unwrap();
    let result = permissions::read_permissions(&dir.path().join("missing"));
    assert!(matches!(result, Err(FsError::NotFound { .. })));
}

#[test]
fn test_read_permissions_kind() {
    let dir = TempDir::new().unwrap();
    let report = permissions::read_permissions(dir.path()).unwrap();
    assert_eq!(report.kind, EntryKind::Directory);
}

#[cfg(unix)]
#[test]
fn test_apply_then_read_permissions() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("script.sh");
    fs::write(&file, b"").unwrap();

    let change = permissions::apply_permissions(&file, "755").unwrap();
    assert!(change.warning.is_none());
    let report = permissions::read_permissions(&file).unwrap();
    assert_eq!(report.triad.symbolic(), "rwxr-xr-x");
    assert_eq!(report.kind, EntryKind::File);

    permissions::apply_permissions(&file, "644").unwrap();
    let report = permissions::read_permissions(&file).unwrap();
    assert_eq!(report.triad.symbolic(), "rw-r--r--");
}

#[test]
fn test_apply_permissions_missing() {
    let dir = TempDir::new().unwrap();
    let result = permissions::apply_permissions(&dir.path().join("missing"), "644");
    assert!(matches!(result, Err(FsError::NotFound { .. })));
}

#[test]
fn test_apply_permissions_checks_target_before_triad() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("f");
    fs::write(&file, b"").unwrap();

    let result = permissions::apply_permissions(&dir.path().join("missing"), "9x");
    assert!(matches!(result, Err(FsError::NotFound { .. })));

    let before = fs::metadata(&file).unwrap().permissions();
    let result = permissions::apply_permissions(&file, "9x");
    assert!(matches!(result, Err(FsError::InvalidArgument { .. })));
    assert_eq!(fs::metadata(&file).unwrap().permissions(), before);
}

#[test]
fn test_apply_permissions_warning_matches_capability() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("f");
    fs::write(&file, b"").unwrap();

    let change = permissions::apply_permissions(&file, "644").unwrap();
    assert_eq!(change.triad.to_string(), "644");
    assert_eq!(
        change.warning.is_none(),
        permissions::supports_posix_permissions()
    );
}
