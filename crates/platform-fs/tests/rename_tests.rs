use platform_fs::{AppContext, Error, FileSystemAccess};
use platform_test_utils::tree::TestTree;

fn access(tree: &TestTree) -> FileSystemAccess {
    FileSystemAccess::new(AppContext::rooted_at(tree.root()))
}

#[test]
fn rename_moves_file() {
    let tree = TestTree::new();
    tree.file("old.txt", "content");
    let fsa = access(&tree);

    fsa.rename(tree.path("old.txt"), tree.path("new.txt")).unwrap();

    tree.assert_missing("old.txt");
    tree.assert_file("new.txt");
    assert_eq!(std::fs::read_to_string(tree.path("new.txt")).unwrap(), "content");
}

#[test]
fn rename_moves_folder() {
    let tree = TestTree::new();
    tree.file("old/inner.txt", "x");
    let fsa = access(&tree);

    fsa.rename(tree.path("old"), tree.path("new")).unwrap();

    tree.assert_missing("old");
    tree.assert_file("new/inner.txt");
}

#[test]
fn rename_missing_source_fails() {
    let tree = TestTree::new();
    let fsa = access(&tree);

    let result = fsa.rename(tree.path("ghost.txt"), tree.path("new.txt"));

    assert!(matches!(result, Err(Error::SourceNotFound { .. })));
    tree.assert_missing("new.txt");
}

#[test]
fn rename_onto_existing_fails_without_change() {
    let tree = TestTree::new();
    tree.file("a.txt", "a").file("b.txt", "b");
    let fsa = access(&tree);

    let result = fsa.rename(tree.path("a.txt"), tree.path("b.txt"));

    match result {
        Err(Error::AlreadyExists { path }) => assert_eq!(path, tree.path("b.txt")),
        other => panic!("expected AlreadyExists, got {other:?}"),
    }
    assert_eq!(std::fs::read_to_string(tree.path("a.txt")).unwrap(), "a");
    assert_eq!(std::fs::read_to_string(tree.path("b.txt")).unwrap(), "b");
}

#[test]
fn rename_into_missing_folder_fails_natively() {
    let tree = TestTree::new();
    tree.file("a.txt", "a");
    let fsa = access(&tree);

    let result = fsa.rename(tree.path("a.txt"), tree.path("nowhere/a.txt"));

    assert!(matches!(result, Err(Error::RenameFailed { .. })));
    tree.assert_file("a.txt");
}
