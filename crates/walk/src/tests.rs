use filters::MaskSet;
use session::{Session, SessionConfig};
use test_support::{ScriptedConnector, dir_entry, file_entry};
use transport::{Credentials, EntryKind};

use super::*;

fn open_session(connector: &ScriptedConnector) -> Session {
    let config = SessionConfig::builder("h", Credentials::new("u", "p"))
        .build()
        .expect("valid config");
    Session::open(connector, config).expect("open")
}

fn collect_paths(listing: Listing<'_>) -> Vec<String> {
    listing
        .map(|entry| entry.expect("listing entry").path().to_owned())
        .collect()
}

#[test]
fn flat_listing_yields_all_entries() {
    let connector = ScriptedConnector::new().with_dir(
        "/data",
        vec![file_entry("a.txt", 1), dir_entry("sub"), file_entry("b.log", 2)],
    );
    let mut session = open_session(&connector);
    let paths = collect_paths(ListBuilder::new("/data").list(&mut session));
    assert_eq!(paths, ["/data/a.txt", "/data/sub", "/data/b.log"]);
}

#[test]
fn dot_and_dot_dot_are_never_surfaced() {
    let connector = ScriptedConnector::new().with_dir(
        "/data",
        vec![
            file_entry(".", 0),
            file_entry("..", 0),
            dir_entry("."),
            dir_entry(".."),
            file_entry("real.txt", 1),
        ],
    );
    let mut session = open_session(&connector);
    let paths = collect_paths(ListBuilder::new("/data").list(&mut session));
    assert_eq!(paths, ["/data/real.txt"]);
}

#[test]
fn recursive_listing_is_pre_order() {
    let connector = ScriptedConnector::new()
        .with_dir(
            "/root",
            vec![dir_entry("a"), dir_entry("b"), file_entry("c.txt", 1)],
        )
        .with_dir("/root/a", vec![file_entry("inner.txt", 1)])
        .with_dir("/root/b", vec![]);
    let mut session = open_session(&connector);
    let paths = collect_paths(ListBuilder::new("/root").recursive(true).list(&mut session));
    assert_eq!(
        paths,
        ["/root/a", "/root/a/inner.txt", "/root/b", "/root/c.txt"]
    );
}

#[test]
fn hidden_directories_are_not_descended_or_listed_recursively() {
    // Tree: /data/a.txt, /data/sub/b.txt, /data/.hidden/c.txt.
    let connector = ScriptedConnector::new()
        .with_dir(
            "/data",
            vec![file_entry("a.txt", 1), dir_entry("sub"), dir_entry(".hidden")],
        )
        .with_dir("/data/sub", vec![file_entry("b.txt", 1)])
        .with_dir("/data/.hidden", vec![file_entry("c.txt", 1)]);
    let mut session = open_session(&connector);
    let paths = collect_paths(ListBuilder::new("/data").recursive(true).list(&mut session));
    assert_eq!(paths, ["/data/a.txt", "/data/sub", "/data/sub/b.txt"]);
    // The hidden directory was never even listed.
    assert_eq!(connector.listed_paths(), ["/data", "/data/sub"]);
}

#[test]
fn non_recursive_listing_still_surfaces_hidden_directories() {
    let connector = ScriptedConnector::new()
        .with_dir("/data", vec![dir_entry(".hidden"), file_entry("a.txt", 1)]);
    let mut session = open_session(&connector);
    let paths = collect_paths(ListBuilder::new("/data").list(&mut session));
    assert_eq!(paths, ["/data/.hidden", "/data/a.txt"]);
}

#[test]
fn include_masks_limit_yield_but_not_descent() {
    let connector = ScriptedConnector::new()
        .with_dir("/d", vec![dir_entry("sub"), file_entry("keep.log", 1)])
        .with_dir("/d/sub", vec![file_entry("deep.log", 1), file_entry("skip.txt", 1)]);
    let mut session = open_session(&connector);
    let masks = MaskSet::new(["*.log"], Vec::<&str>::new()).expect("masks");
    let paths = collect_paths(
        ListBuilder::new("/d")
            .recursive(true)
            .masks(masks)
            .list(&mut session),
    );
    // "sub" does not match *.log so it is not yielded, but it is descended.
    assert_eq!(paths, ["/d/sub/deep.log", "/d/keep.log"]);
}

#[test]
fn exclude_overrides_include() {
    let connector = ScriptedConnector::new().with_dir(
        "/d",
        vec![file_entry("a.log", 1), file_entry("debug.log", 1)],
    );
    let mut session = open_session(&connector);
    let masks = MaskSet::new(["*.log"], ["debug.*"]).expect("masks");
    let paths = collect_paths(ListBuilder::new("/d").masks(masks).list(&mut session));
    assert_eq!(paths, ["/d/a.log"]);
}

#[test]
fn kind_filtering_drops_the_unwanted_kind() {
    let connector = ScriptedConnector::new()
        .with_dir("/d", vec![dir_entry("sub"), file_entry("f.txt", 1)]);

    let mut session = open_session(&connector);
    let files = collect_paths(ListBuilder::new("/d").files_only(true).list(&mut session));
    assert_eq!(files, ["/d/f.txt"]);

    let dirs = collect_paths(
        ListBuilder::new("/d")
            .directories_only(true)
            .list(&mut session),
    );
    assert_eq!(dirs, ["/d/sub"]);

    // Both flags requested yields all kinds, same as neither.
    let both = collect_paths(
        ListBuilder::new("/d")
            .files_only(true)
            .directories_only(true)
            .list(&mut session),
    );
    assert_eq!(both, ["/d/sub", "/d/f.txt"]);
}

#[test]
fn listing_is_lazy_until_consumed() {
    let connector = ScriptedConnector::new()
        .with_dir("/d", vec![dir_entry("one"), dir_entry("two")])
        .with_dir("/d/one", vec![file_entry("a", 1)])
        .with_dir("/d/two", vec![file_entry("b", 1)]);
    let mut session = open_session(&connector);

    let mut listing = ListBuilder::new("/d").recursive(true).list(&mut session);
    // Nothing listed before the first advance.
    assert!(connector.listed_paths().is_empty());

    // Stop after the first entry: "two" must never be listed.
    let first = listing.next().expect("entry").expect("ok");
    assert_eq!(first.path(), "/d/one");
    drop(listing);
    assert_eq!(connector.listed_paths(), ["/d"]);
}

#[test]
fn listing_failure_terminates_the_sequence() {
    let connector = ScriptedConnector::new()
        .with_dir("/d", vec![file_entry("before.txt", 1), dir_entry("bad"), file_entry("after.txt", 1)])
        .with_listing_failure("/d/bad", "permission denied");
    let mut session = open_session(&connector);

    let mut listing = ListBuilder::new("/d").recursive(true).list(&mut session);
    let first = listing.next().expect("entry").expect("ok");
    assert_eq!(first.name(), "before.txt");
    let second = listing.next().expect("entry").expect("ok");
    assert_eq!(second.name(), "bad");

    let error = listing.next().expect("entry").unwrap_err();
    assert_eq!(error.path(), Some("/d/bad/"));
    assert!(matches!(error.kind(), ListingErrorKind::Listing { .. }));

    // Fused after the failure; "after.txt" is gone with the sequence.
    assert!(listing.next().is_none());
}

#[test]
fn listing_against_closed_session_reports_not_open() {
    let connector = ScriptedConnector::new().with_dir("/d", vec![]);
    let mut session = open_session(&connector);
    session.close();

    let mut listing = ListBuilder::new("/d").list(&mut session);
    let error = listing.next().expect("entry").unwrap_err();
    assert!(matches!(error.kind(), ListingErrorKind::SessionNotOpen));
    assert!(listing.next().is_none());
}

#[test]
fn entries_report_kind_and_metadata() {
    let connector = ScriptedConnector::new()
        .with_dir("/d", vec![file_entry("data.bin", 42), dir_entry("sub")]);
    let mut session = open_session(&connector);
    let entries: Vec<_> = ListBuilder::new("/d")
        .list(&mut session)
        .map(|entry| entry.expect("ok"))
        .collect();

    assert_eq!(entries[0].kind(), EntryKind::File);
    assert_eq!(entries[0].size(), 42);
    assert_eq!(entries[0].base_name(), "data");
    assert!(entries[1].is_directory());
    assert_eq!(entries[1].permissions(), 0o755);
}
