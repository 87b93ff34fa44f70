mod common;
use crate::common::init_tracing;

use std::error::Error;

use pollwatch::errors::PollwatchError;
use pollwatch::watch::{ExtensionFilter, Watcher, WatcherOptions, resolve_paths};
use pollwatch_test_utils::builders::TempTree;

type TestResult = Result<(), Box<dyn Error>>;

fn go_filter() -> ExtensionFilter {
    ExtensionFilter::new(&["go".to_string()])
}

#[test]
fn descendant_paths_collapse_into_ancestor() -> TestResult {
    init_tracing();
    let tree = TempTree::new();
    tree.mkdir("proj/sub");

    let patterns = vec![tree.path_str("proj"), tree.path_str("proj/sub")];
    let resolved = resolve_paths(&patterns, &go_filter())?;

    assert_eq!(resolved.len(), 1);
    assert!(resolved.contains(&tree.path_str("proj")));
    Ok(())
}

#[test]
fn duplicate_patterns_are_deduplicated() -> TestResult {
    init_tracing();
    let tree = TempTree::new();
    tree.mkdir("proj");

    let patterns = vec![tree.path_str("proj"), tree.path_str("proj")];
    let resolved = resolve_paths(&patterns, &go_filter())?;

    assert_eq!(resolved.len(), 1);
    Ok(())
}

#[test]
fn resolution_is_idempotent() -> TestResult {
    init_tracing();
    let tree = TempTree::new();
    tree.write_file("proj/x.go", "package main");
    tree.write_file("proj/x.log", "noise");
    tree.mkdir("other");

    let patterns = vec![
        tree.path_str("proj/*"),
        tree.path_str("other"),
        tree.path_str("does/not/exist"),
    ];
    let first = resolve_paths(&patterns, &go_filter())?;
    let second = resolve_paths(&patterns, &go_filter())?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn glob_matches_are_gated_by_extension() -> TestResult {
    init_tracing();
    let tree = TempTree::new();
    tree.write_file("proj/x.go", "package main");
    tree.write_file("proj/x.log", "noise");

    let patterns = vec![tree.path_str("proj/*")];
    let resolved = resolve_paths(&patterns, &go_filter())?;

    assert!(resolved.contains(&tree.path_str("proj/x.go")));
    assert!(!resolved.contains(&tree.path_str("proj/x.log")));
    Ok(())
}

#[test]
fn recursive_glob_crosses_directory_boundaries() -> TestResult {
    init_tracing();
    let tree = TempTree::new();
    tree.write_file("proj/a/b/c.go", "package main");

    let patterns = vec![tree.path_str("proj/**/*.go")];
    let resolved = resolve_paths(&patterns, &go_filter())?;

    assert!(resolved.contains(&tree.path_str("proj/a/b/c.go")));
    Ok(())
}

#[test]
fn literal_patterns_skip_the_extension_filter() -> TestResult {
    init_tracing();
    let tree = TempTree::new();
    tree.write_file("proj/notes.txt", "todo");

    // Literal entries may be directories, files of unwatched types, or
    // paths that don't exist yet; all are kept verbatim.
    let patterns = vec![
        tree.path_str("proj/notes.txt"),
        tree.path_str("not/created/yet"),
    ];
    let resolved = resolve_paths(&patterns, &go_filter())?;

    assert!(resolved.contains(&tree.path_str("proj/notes.txt")));
    assert!(resolved.contains(&tree.path_str("not/created/yet")));
    Ok(())
}

#[test]
fn malformed_glob_fails_whole_resolution() {
    init_tracing();
    let result = resolve_paths(&["src/[*.go".to_string()], &go_filter());

    match result {
        Err(PollwatchError::GlobPattern { pattern, .. }) => {
            assert_eq!(pattern, "src/[*.go");
        }
        Err(e) => panic!("expected GlobPattern error, got: {e:?}"),
        Ok(set) => panic!("expected error, got: {set:?}"),
    }
}

#[test]
fn watcher_construction_fails_on_malformed_glob() {
    init_tracing();
    let options = WatcherOptions {
        watch: vec!["src/[*.go".to_string()],
        ..WatcherOptions::default()
    };

    assert!(matches!(
        Watcher::new(&options),
        Err(PollwatchError::GlobPattern { .. })
    ));
}
