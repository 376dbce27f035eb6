use std::fs::{self, File, FileTimes};
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tempfile::TempDir;
use volinfo_scan::{VolumeConfig, VolumeScanner};

const BASE: u64 = 1_700_000_000;

fn at(secs: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(secs)
}

/// Pin access and modification time of a file or directory.
fn pin_times(path: &Path, time: SystemTime) {
    let file = if path.is_dir() {
        File::open(path).unwrap()
    } else {
        File::options().write(true).open(path).unwrap()
    };
    file.set_times(FileTimes::new().set_accessed(time).set_modified(time))
        .unwrap();
}

fn scanner_for(root: &Path) -> VolumeScanner {
    let config = VolumeConfig::builder().mount_point(root).build().unwrap();
    VolumeScanner::with_config(config)
}

#[test]
fn test_latest_modify_in_nested_file() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join("a.txt"), "a").unwrap();
    fs::create_dir(root.join("b")).unwrap();
    fs::write(root.join("b/c.txt"), "c").unwrap();

    pin_times(&root.join("a.txt"), at(BASE));
    pin_times(&root.join("b/c.txt"), at(BASE + 10));
    pin_times(&root.join("b"), at(BASE - 100));

    let outcome = scanner_for(root).scan();
    assert!(outcome.is_complete());

    let modify = outcome.report.latest.modify.as_ref().unwrap();
    assert_eq!(modify.file_name, "c.txt");
    assert!(modify.path.ends_with("b/c.txt"));
    assert_eq!(modify.time, at(BASE + 10));
}

#[test]
fn test_mount_point_itself_is_excluded() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join("only.txt"), "x").unwrap();
    pin_times(&root.join("only.txt"), at(BASE));
    // The root is newer than anything inside it.
    pin_times(root, at(BASE + 1_000));

    let outcome = scanner_for(root).scan();
    let modify = outcome.report.latest.modify.unwrap();
    assert_eq!(modify.file_name, "only.txt");
    assert_eq!(modify.time, at(BASE));
}

#[test]
fn test_tie_keeps_first_in_traversal_order() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join("first.txt"), "1").unwrap();
    fs::write(root.join("second.txt"), "2").unwrap();
    pin_times(&root.join("second.txt"), at(BASE));
    pin_times(&root.join("first.txt"), at(BASE));

    for _ in 0..3 {
        let outcome = scanner_for(root).scan();
        let modify = outcome.report.latest.modify.unwrap();
        assert_eq!(modify.file_name, "first.txt");
    }
}

#[test]
fn test_directory_entries_count() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir(root.join("newest-dir")).unwrap();
    fs::write(root.join("old.txt"), "x").unwrap();
    pin_times(&root.join("old.txt"), at(BASE));
    pin_times(&root.join("newest-dir"), at(BASE + 500));

    let outcome = scanner_for(root).scan();
    assert_eq!(outcome.report.latest.modify.unwrap().file_name, "newest-dir");
}

#[test]
fn test_scan_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("x/y")).unwrap();
    fs::write(root.join("x/y/z.txt"), "z").unwrap();
    fs::write(root.join("w.txt"), "w").unwrap();
    pin_times(&root.join("x/y/z.txt"), at(BASE + 5));
    pin_times(&root.join("w.txt"), at(BASE + 7));
    pin_times(&root.join("x/y"), at(BASE));
    pin_times(&root.join("x"), at(BASE));

    let first = scanner_for(root).scan().report;
    let second = scanner_for(root).scan().report;
    assert_eq!(first.latest.modify, second.latest.modify);
    // Listing a directory may bump its access time, so only stable categories are compared.
    assert_eq!(first.latest.birth, second.latest.birth);
    assert_eq!(first.latest.modify.unwrap().file_name, "w.txt");
}

#[test]
fn test_empty_volume() {
    let temp = TempDir::new().unwrap();
    let outcome = scanner_for(temp.path()).scan();

    assert!(outcome.is_complete());
    assert!(outcome.report.is_empty);
    assert!(outcome.report.latest.is_zero());
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_is_not_fatal() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join("readable.txt"), "ok").unwrap();
    fs::create_dir(root.join("locked")).unwrap();
    fs::write(root.join("locked/inner.txt"), "hidden").unwrap();
    pin_times(&root.join("locked/inner.txt"), at(BASE + 900));
    pin_times(&root.join("readable.txt"), at(BASE + 10));
    pin_times(&root.join("locked"), at(BASE));
    fs::set_permissions(root.join("locked"), fs::Permissions::from_mode(0o000)).unwrap();

    let locked_out = fs::read_dir(root.join("locked")).is_err();
    let outcome = scanner_for(root).scan();

    fs::set_permissions(root.join("locked"), fs::Permissions::from_mode(0o755)).unwrap();

    assert!(outcome.is_complete());
    let modify = outcome.report.latest.modify.unwrap();
    if locked_out {
        assert!(!outcome.warnings.is_empty());
        assert!(outcome.warnings.iter().any(|w| w.path.ends_with("locked")));
        assert_eq!(modify.file_name, "readable.txt");
    } else {
        // Running with privileges that bypass permission checks.
        assert_eq!(modify.file_name, "inner.txt");
    }
}
