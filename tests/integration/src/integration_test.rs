//! End-to-end scenarios across the file system and image modules.

use platform_fs::{AppContext, FileSystemAccess};
use platform_image::{ImageFormat, ImageSource, from_file};
use platform_test_utils::images;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn setup() -> (TempDir, AppContext, FileSystemAccess) {
    // Tests share one process; only the first call installs the subscriber
    let _ = platform_fs::logging::init();
    let temp = TempDir::new().unwrap();
    let context = AppContext::rooted_at(temp.path());
    let fsa = FileSystemAccess::new(context.clone());
    (temp, context, fsa)
}

#[test]
fn gallery_lifecycle() {
    let (_temp, context, fsa) = setup();

    // Resources are bundled under the context root
    let resources = fsa.get_folder(&context.resources_dir).unwrap();
    images::write_png(&context.resources_dir.join("banner.png"), 120, 40);

    let gallery_path = fsa.join_paths(&[fsa.get_documents_folder_path().as_str(), "gallery"]);
    let gallery = fsa.get_folder(&gallery_path).unwrap();
    assert_eq!(gallery.name, "gallery");

    let mut source = ImageSource::with_context(&context);
    assert!(source.load_from_resource("banner"));
    let thumb_path = fsa.join_path(&gallery.path, "banner.jpg");
    assert!(source.save_to_file(&thumb_path, ImageFormat::Jpeg, 80));

    let entities = fsa.get_entities(&gallery.path).unwrap();
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].name, "banner.jpg");
    assert_eq!(entities[0].extension.as_deref(), Some(".jpg"));

    let renamed = fsa.join_path(&gallery.path, "cover.jpg");
    fsa.rename(&thumb_path, &renamed).unwrap();
    let reloaded = from_file(&renamed).unwrap();
    assert_eq!((reloaded.width(), reloaded.height()), (Some(120), Some(40)));

    fsa.delete_folder(&gallery.path, false).unwrap();
    assert!(!fsa.folder_exists(&gallery.path));
    assert!(fsa.folder_exists(&resources.path));
}

#[test]
fn text_and_temp_storage() {
    let (_temp, _context, fsa) = setup();

    let temp_root = fsa.get_temp_folder_path();
    let note = fsa.get_file(fsa.join_path(&temp_root, "note.txt")).unwrap();
    fsa.write_text(&note.path, "first\nsecond\n", None).unwrap();

    assert_eq!(fsa.read_text(&note.path, None).unwrap(), "first\nsecond");
    assert_eq!(fsa.get_parent(&note.path).unwrap().path, temp_root);

    fsa.empty_folder(&temp_root).unwrap();
    assert!(fsa.get_entities(&temp_root).unwrap().is_empty());
    assert!(fsa.folder_exists(&temp_root));
}
