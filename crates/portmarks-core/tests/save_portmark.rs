//! Integration test: create portmarks in a scratch directory through the public API.

use portmarks_core::config::PortmarkConfig;
use portmarks_core::sink::temp_path;
use portmarks_core::{alert_message, create_portmark, DirectorySink, PortmarkError};
use tempfile::tempdir;

#[test]
fn saves_portmark_with_derived_name_and_redirect() {
    let dir = tempdir().unwrap();
    let mut sink = DirectorySink::new(dir.path());
    let cfg = PortmarkConfig::default();

    let saved = create_portmark("https://example.com/search?q=hello world", &cfg, &mut sink)
        .expect("create_portmark");

    assert_eq!(saved.filename, "example.com_search_q=hello_world.portmark.html");
    assert_eq!(saved.path, dir.path().join(&saved.filename));
    let html = std::fs::read_to_string(&saved.path).unwrap();
    assert!(html.starts_with("<html><head><meta http-equiv=\"refresh\" content=\"0;url="));
    assert!(html.contains("https://example.com/search?q=hello world"));

    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1, "only the portmark should remain");
}

#[test]
fn second_save_of_same_url_is_refused_then_forced() {
    let dir = tempdir().unwrap();
    let cfg = PortmarkConfig::default();

    let mut sink = DirectorySink::new(dir.path());
    let first = create_portmark("https://example.com/", &cfg, &mut sink).unwrap();

    let err = create_portmark("https://example.com/", &cfg, &mut sink).unwrap_err();
    assert!(matches!(err, PortmarkError::Download(_)));
    assert!(alert_message(&err).starts_with("Portmarks: Failed to save bookmark.\n\n"));
    assert!(!temp_path(&first.path).exists());

    let mut forced = DirectorySink::new(dir.path()).overwrite(true);
    let again = create_portmark("https://example.com/", &cfg, &mut forced).unwrap();
    assert_eq!(again.path, first.path);
}

#[test]
fn long_and_garbage_urls_produce_bounded_names() {
    let dir = tempdir().unwrap();
    let cfg = PortmarkConfig::default();
    let mut sink = DirectorySink::new(dir.path()).overwrite(true);

    let long = format!("https://example.com/{}", "segment/".repeat(40));
    let saved = create_portmark(&long, &cfg, &mut sink).unwrap();
    assert_eq!(saved.filename.chars().count(), 150);
    assert!(saved.filename.ends_with("....portmark.html"));
    assert!(saved.path.exists());

    let saved = create_portmark("not a url", &cfg, &mut sink).unwrap();
    assert_eq!(saved.filename, "bookmark.portmark.html");
    assert!(saved.path.exists());
}

#[test]
fn long_multibyte_path_is_written_to_disk() {
    let dir = tempdir().unwrap();
    let cfg = PortmarkConfig::default();
    let mut sink = DirectorySink::new(dir.path());

    let url = format!("https://ja.wikipedia.org/wiki/{}", "\u{65e5}\u{672c}".repeat(40));
    let saved = create_portmark(&url, &cfg, &mut sink).expect("multibyte name must fit NAME_MAX");

    assert!(saved.filename.len() + ".part".len() <= 255, "{} bytes", saved.filename.len());
    assert!(saved.filename.starts_with("ja.wikipedia.org_wiki_\u{65e5}\u{672c}"));
    assert!(saved.filename.ends_with("....portmark.html"));
    assert!(saved.path.exists());
    assert!(!temp_path(&saved.path).exists());
}
