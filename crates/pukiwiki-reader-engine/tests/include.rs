use std::fs;
use std::path::PathBuf;

use pukiwiki_reader_engine::{
    Document, IncludeError, IoError, RenderError, WikiConfig, io::file_name_for_page,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write_page(dir: &TempDir, page_name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(file_name_for_page(page_name));
    fs::write(&path, content).unwrap();
    path
}

fn render_file(path: &PathBuf, config: &WikiConfig) -> Result<String, RenderError> {
    Document::from_file(path).unwrap().render(config)
}

#[test]
fn includes_page_from_same_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_page(&dir, "Menu", "-home\n");
    let main = write_page(&dir, "Front Page", "* Top\n#include(Menu)\n");

    assert_eq!(
        render_file(&main, &WikiConfig::default()).unwrap(),
        "<h1>Top</h1>\n<ul><li>home</li></ul>"
    );
}

#[test]
fn source_root_overrides_document_directory() {
    let pages = tempfile::tempdir().unwrap();
    let elsewhere = tempfile::tempdir().unwrap();
    write_page(&pages, "Menu", "from root\n");
    write_page(&elsewhere, "Menu", "from sibling\n");
    let main = write_page(&elsewhere, "Main", "#include(Menu)\n");

    let config = WikiConfig {
        source_root: Some(pages.path().to_path_buf()),
        ..WikiConfig::default()
    };
    assert_eq!(render_file(&main, &config).unwrap(), "<p>from root</p>");
}

#[test]
fn parsed_text_has_no_source_location() {
    let err = Document::parse("#include(Menu)\n")
        .unwrap()
        .render(&WikiConfig::default())
        .unwrap_err();
    assert!(matches!(err, RenderError::Include(IncludeError::NoSourceLocation)));
}

#[test]
fn page_name_is_required() {
    let dir = tempfile::tempdir().unwrap();
    let main = write_page(&dir, "Main", "#include\n");

    let err = render_file(&main, &WikiConfig::default()).unwrap_err();
    assert!(matches!(err, RenderError::Include(IncludeError::MissingPageName)));
}

#[test]
fn self_inclusion_stops_at_depth_limit() {
    let dir = tempfile::tempdir().unwrap();
    let main = write_page(&dir, "Loop", "#include(Loop)\n");

    let config = WikiConfig {
        include_depth_limit: Some(3),
        ..WikiConfig::default()
    };
    let err = render_file(&main, &config).unwrap_err();
    assert!(matches!(
        err,
        RenderError::Include(IncludeError::DepthExceeded { limit: 3 })
    ));
}

#[test]
fn missing_page_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let main = write_page(&dir, "Main", "#include(Nowhere)\n");

    let err = render_file(&main, &WikiConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        RenderError::Include(IncludeError::Io(IoError::NotFound(_)))
    ));
}

#[test]
fn included_contents_lists_included_headings() {
    let dir = tempfile::tempdir().unwrap();
    write_page(&dir, "Part", "*Part one [#p1]\n#contents\n");
    let main = write_page(&dir, "Main", "* Main [#m]\n#include(Part)\n");

    assert_eq!(
        render_file(&main, &WikiConfig::default()).unwrap(),
        "<h1 id=\"m\">Main</h1>\n<h1 id=\"p1\">Part one</h1>\n<ul>\n<li>\n<a href=\"#p1\">Part one</a>\n</li>\n</ul>"
    );
}
