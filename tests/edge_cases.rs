//! Edge case and error handling tests for rec-traverse


use harness::{TestTree, run_in, run_tool};
use std::fs;
#[cfg(unix)]
use std::os::unix::fs::{PermissionsExt, symlink};

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn test_nonexistent_root_fails() {
    let cwd = TestTree::new();

    let (stdout, stderr, success, code) = run_tool(cwd.path(), &["does-not-exist"]);
    assert!(!success, "missing root should fail");
    assert_eq!(code, Some(1));
    // The root line is printed before the walk starts
    assert_eq!(stdout, "does-not-exist\n");
    assert!(
        stderr.contains("error accessing does-not-exist"),
        "should name the path: {}",
        stderr
    );
}

#[test]
fn test_nonexistent_root_keep_going_still_fails() {
    let cwd = TestTree::new();

    let (_stdout, stderr, success, code) =
        run_tool(cwd.path(), &["--keep-going", "does-not-exist"]);
    assert!(!success);
    assert_eq!(code, Some(1));
    assert!(
        stderr.contains("1 entry could not be read"),
        "should summarize errors: {}",
        stderr
    );
}

#[test]
fn test_html_file_cannot_be_created() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "a");
    let cwd = TestTree::new();
    // A directory with the output file's name blocks file creation
    cwd.add_dir("directory_tree.html");
    let root = tree.path().display().to_string();

    let (stdout, stderr, success, code) = run_tool(cwd.path(), &["--html", &root]);
    assert!(!success);
    assert_eq!(code, Some(1));
    assert!(stdout.is_empty(), "nothing should be printed: {}", stdout);
    assert!(
        stderr.contains("error creating HTML file"),
        "should report creation failure: {}",
        stderr
    );
}

#[test]
fn test_invalid_maxdepth_value() {
    let cwd = TestTree::new();

    let (_stdout, stderr, success, code) = run_tool(cwd.path(), &["--maxdepth", "deep", "."]);
    assert!(!success);
    assert_eq!(code, Some(1));
    assert!(stderr.contains("deep"), "should mention the bad value: {}", stderr);
}

#[test]
fn test_any_negative_maxdepth_is_unlimited() {
    let tree = TestTree::new();
    tree.add_file("a/b/c.txt", "c");

    let (unlimited, _, ok1) = run_in(&tree, &[]);
    let (negative, _, ok2) = run_in(&tree, &["--maxdepth", "-5"]);
    assert!(ok1 && ok2);
    assert_eq!(unlimited, negative);
}

/// Returns true when permission bits are not enforced (e.g. running as root).
#[cfg(unix)]
fn permissions_ignored(dir: &std::path::Path) -> bool {
    fs::read_dir(dir).is_ok()
}

#[cfg(unix)]
fn set_mode(path: &std::path::Path, mode: u32) {
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_mode(mode);
    fs::set_permissions(path, perms).expect("Failed to set permissions");
}

#[test]
#[cfg(unix)]
fn test_unreadable_directory_aborts() {
    let tree = TestTree::new();
    tree.add_file("a_readable/file.txt", "r");
    let locked = tree.add_dir("b_locked");
    tree.add_file("b_locked/hidden.txt", "h");
    tree.add_file("c_after.txt", "c");
    set_mode(&locked, 0o000);

    if permissions_ignored(&locked) {
        set_mode(&locked, 0o755);
        eprintln!("skipping: permission bits are not enforced here (running as root?)");
        return;
    }

    let (stdout, stderr, success) = run_in(&tree, &[]);
    set_mode(&locked, 0o755);

    assert!(!success, "unreadable directory should abort the walk");
    assert!(stdout.contains("file.txt"), "entries before the error stay: {}", stdout);
    assert!(!stdout.contains("c_after.txt"), "walk should stop: {}", stdout);
    assert!(stderr.contains("b_locked"), "should name the path: {}", stderr);
}

#[test]
#[cfg(unix)]
fn test_unreadable_directory_keep_going() {
    let tree = TestTree::new();
    tree.add_file("a_readable/file.txt", "r");
    let locked = tree.add_dir("b_locked");
    tree.add_file("b_locked/hidden.txt", "h");
    tree.add_file("c_after.txt", "c");
    set_mode(&locked, 0o000);

    if permissions_ignored(&locked) {
        set_mode(&locked, 0o755);
        eprintln!("skipping: permission bits are not enforced here (running as root?)");
        return;
    }

    let (stdout, stderr, success) = run_in(&tree, &["--keep-going"]);
    set_mode(&locked, 0o755);

    assert!(!success, "skipped entries still fail the run");
    assert!(stdout.contains("file.txt"), "{}", stdout);
    assert!(stdout.contains("c_after.txt"), "walk should continue: {}", stdout);
    assert!(!stdout.contains("hidden.txt"));
    assert!(stderr.contains("1 entry could not be read"), "{}", stderr);
}

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
#[cfg(unix)]
fn test_symlink_to_directory_not_followed() {
    let tree = TestTree::new();
    tree.add_file("realdir/file.txt", "f");
    symlink("realdir", tree.path().join("linkdir")).expect("Failed to create dir symlink");

    let (stdout, _stderr, success) = run_in(&tree, &[]);
    assert!(success);
    // The link is listed with its own size (length of the target path)
    assert!(stdout.contains("└── linkdir (7 bytes)"), "{}", stdout);
    assert_eq!(stdout.matches("file.txt").count(), 1);
}

#[test]
#[cfg(unix)]
fn test_symlink_to_parent_no_infinite_loop() {
    let tree = TestTree::new();
    tree.add_file("subdir/file.txt", "f");
    symlink("..", tree.path().join("subdir").join("parent"))
        .expect("Failed to create parent symlink");

    let (stdout, _stderr, success) = run_in(&tree, &[]);
    assert!(success, "should not hang on parent symlink");
    assert!(stdout.contains("    └── parent (2 bytes)"), "{}", stdout);
}

#[test]
#[cfg(unix)]
fn test_broken_symlink() {
    let tree = TestTree::new();
    tree.add_file("real.txt", "real");
    symlink("nonexistent.txt", tree.path().join("broken_link"))
        .expect("Failed to create broken symlink");

    let (stdout, _stderr, success) = run_in(&tree, &[]);
    assert!(success, "broken symlinks are listed, not errors");
    assert!(stdout.contains("└── broken_link (15 bytes)"), "{}", stdout);
    assert!(stdout.contains("└── real.txt (4 bytes)"));
}

// ============================================================================
// Special Filenames
// ============================================================================

#[test]
fn test_filename_with_spaces() {
    let tree = TestTree::new();
    tree.add_file("file with spaces.txt", "s");
    tree.add_file("dir with spaces/nested.txt", "n");

    let (stdout, _stderr, success) = run_in(&tree, &[]);
    assert!(success);
    assert!(stdout.contains("└── [DIR] dir with spaces"), "{}", stdout);
    assert!(stdout.contains("└── file with spaces.txt (1 bytes)"), "{}", stdout);
}

#[test]
fn test_filename_with_unicode() {
    let tree = TestTree::new();
    tree.add_file("日本語.txt", "jp");
    tree.add_file("中文目录/文件.txt", "cn");

    let (stdout, _stderr, success) = run_in(&tree, &[]);
    assert!(success);
    assert!(stdout.contains("└── 日本語.txt (2 bytes)"), "{}", stdout);
    assert!(stdout.contains("└── [DIR] 中文目录"));
    assert!(stdout.contains("    └── 文件.txt (2 bytes)"));
}

#[test]
fn test_hidden_and_gitignored_files_are_listed() {
    let tree = TestTree::new();
    tree.add_file(".gitignore", "*.log\n");
    tree.add_file("debug.log", "log");
    tree.add_file(".hidden/inner.txt", "i");

    let (stdout, _stderr, success) = run_in(&tree, &[]);
    assert!(success);
    assert!(stdout.contains("debug.log"), "no filtering: {}", stdout);
    assert!(stdout.contains("[DIR] .hidden"));
    assert!(stdout.contains("inner.txt"));
}

#[test]
fn test_empty_file_size() {
    let tree = TestTree::new();
    tree.add_file("empty.txt", "");

    let (stdout, _stderr, success) = run_in(&tree, &[]);
    assert!(success);
    assert_eq!(stdout, ".\n└── empty.txt (0 bytes)\n");
}
