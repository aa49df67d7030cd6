//! Integration test: admin mutations and front-door lookups sharing one rules file.

use std::fs;

use redirmap_core::export::render_text;
use redirmap_core::{
    HostMatch, MutateError, Resolution, Resolver, RuleMutator, RuleStore, StoreError,
};
use tempfile::tempdir;

#[test]
fn admin_writes_are_visible_to_front_door() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data").join("domains.json");
    let admin = RuleMutator::new(RuleStore::new(&path));
    let front = Resolver::new(RuleStore::new(&path), HostMatch::Exact);

    assert_eq!(front.lookup("example.com"), Resolution::Unconfigured);

    admin.add_one("Example.COM", " https://target.com ").unwrap();
    assert_eq!(
        front.lookup("example.com"),
        Resolution::Redirect("https://target.com".to_string())
    );
    assert_eq!(front.lookup("Example.COM"), Resolution::Unconfigured);

    let added = admin
        .add_batch("a.com https://x.com\nb.com https://y.com")
        .unwrap();
    assert_eq!(added, 2);
    assert_eq!(
        render_text(&admin.list_all()),
        "example.com https://target.com\na.com https://x.com\nb.com https://y.com\n"
    );

    assert_eq!(admin.delete_batch(&["a.com", "zzz.com"]).unwrap(), 1);
    assert!(admin.delete_one("example.com").unwrap());
    assert_eq!(front.lookup("example.com"), Resolution::Unconfigured);
    assert_eq!(front.lookup("b.com").target(), Some("https://y.com"));
}

#[test]
fn legacy_record_file_is_served_and_overwritten_as_bare() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("domains.json");
    fs::write(
        &path,
        r#"{
    "old.example.com": { "target": "https://new.example.com", "label": "Old" },
    "legacy.example.org": "https://modern.example.org"
}"#,
    )
    .unwrap();

    let front = Resolver::new(RuleStore::new(&path), HostMatch::Exact);
    assert_eq!(
        front.lookup("old.example.com").target(),
        Some("https://new.example.com")
    );

    let admin = RuleMutator::new(RuleStore::new(&path));
    admin.add_one("old.example.com", "https://newer.example.com").unwrap();
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "old.example.com": "https://newer.example.com",
            "legacy.example.org": "https://modern.example.org"
        })
    );
}

#[test]
fn corrupt_file_fails_open_for_front_door() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("domains.json");
    fs::write(&path, b"\x00\x01 garbage").unwrap();

    let front = Resolver::new(RuleStore::new(&path), HostMatch::CaseInsensitive);
    assert_eq!(front.lookup("anything.com"), Resolution::Unconfigured);
}

#[test]
fn blocked_store_reports_storage_failure() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("domains.json");
    // A non-empty directory where the rules file belongs cannot be replaced
    // by the atomic rename, whatever the process privileges.
    fs::create_dir(&path).unwrap();
    fs::write(path.join("notes.txt"), b"keep me").unwrap();

    let admin = RuleMutator::new(RuleStore::new(&path));
    let front = Resolver::new(RuleStore::new(&path), HostMatch::Exact);

    let err = admin.add_one("b.com", "https://b").unwrap_err();
    assert!(matches!(err, MutateError::Store(StoreError::Io { .. })));
    let err = admin.add_batch("c.com https://c
d.com https://d").unwrap_err();
    assert!(matches!(err, MutateError::Store(StoreError::Io { .. })));

    // Failed changes are not visible and the blocking entry is untouched.
    assert!(admin.list_all().is_empty());
    assert_eq!(front.lookup("b.com"), Resolution::Unconfigured);
    assert_eq!(fs::read(path.join("notes.txt")).unwrap(), b"keep me");
}
