use platform_fs::{AppContext, Error, FileSystemAccess, TextEncoding};
use platform_test_utils::tree::TestTree;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn access(tree: &TestTree) -> FileSystemAccess {
    FileSystemAccess::new(AppContext::rooted_at(tree.root()))
}

#[test]
fn read_text_drops_trailing_newline() {
    let tree = TestTree::new();
    tree.file("a.txt", "a\nb\n");
    let fsa = access(&tree);

    assert_eq!(fsa.read_text(tree.path("a.txt"), None).unwrap(), "a\nb");
}

#[rstest]
#[case::plain("hello", "hello")]
#[case::crlf("one\r\ntwo\r\n", "one\ntwo")]
#[case::lone_cr("one\rtwo", "one\ntwo")]
#[case::blank_lines("a\n\nb", "a\n\nb")]
#[case::only_newline("\n", "")]
#[case::empty("", "")]
fn read_text_joins_lines(#[case] on_disk: &str, #[case] expected: &str) {
    let tree = TestTree::new();
    tree.file("a.txt", on_disk);
    let fsa = access(&tree);

    assert_eq!(fsa.read_text(tree.path("a.txt"), None).unwrap(), expected);
}

#[test]
fn read_text_missing_file_fails() {
    let tree = TestTree::new();
    let fsa = access(&tree);

    let result = fsa.read_text(tree.path("missing.txt"), None);

    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn write_text_overwrites_existing_file() {
    let tree = TestTree::new();
    tree.file("a.txt", "a much longer original body");
    let fsa = access(&tree);

    fsa.write_text(tree.path("a.txt"), "short", None).unwrap();

    assert_eq!(std::fs::read_to_string(tree.path("a.txt")).unwrap(), "short");
}

#[test]
fn write_text_does_not_create_parent_folders() {
    let tree = TestTree::new();
    let fsa = access(&tree);

    let result = fsa.write_text(tree.path("missing/a.txt"), "x", None);

    assert!(matches!(result, Err(Error::Io { .. })));
    tree.assert_missing("missing");
}

#[rstest]
#[case(TextEncoding::Utf8)]
#[case(TextEncoding::Utf16)]
#[case(TextEncoding::Utf16Be)]
#[case(TextEncoding::Utf16Le)]
#[case(TextEncoding::Iso8859_1)]
fn written_text_reads_back(#[case] encoding: TextEncoding) {
    let tree = TestTree::new();
    let fsa = access(&tree);
    let path = tree.path("text.txt");

    fsa.write_text(&path, "Grüße\nzweite Zeile", Some(encoding)).unwrap();

    assert_eq!(fsa.read_text(&path, Some(encoding)).unwrap(), "Grüße\nzweite Zeile");
}

#[test]
fn latin1_file_is_written_byte_per_char() {
    let tree = TestTree::new();
    let fsa = access(&tree);
    let path = tree.path("latin1.txt");

    fsa.write_text(&path, "é", Some(TextEncoding::Iso8859_1)).unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), vec![0xE9]);
}

#[test]
fn default_encoding_is_utf8() {
    let tree = TestTree::new();
    let fsa = access(&tree);
    let path = tree.path("utf8.txt");

    fsa.write_text(&path, "é", None).unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), "é".as_bytes());
}
