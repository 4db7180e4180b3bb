//! End-to-end snapshot round-trip over a shared filesystem-backed store.
//!
//! Two managers point at the same bucket root: one cuts a snapshot of its
//! tree, the other restores it into a fresh directory. The restored tree
//! must be byte-identical to the source at save time.

use promptvault_blob::FsStore;
use promptvault_prompt::HierarchicalResolver;
use promptvault_version::{Bump, Source, Version, VersionManager};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (rel, content) in files {
        let path = rel.split('/').fold(root.to_path_buf(), |p, seg| p.join(seg));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

fn read_tree(root: &Path) -> BTreeMap<String, Vec<u8>> {
    let mut files = BTreeMap::new();
    for entry in walkdir::WalkDir::new(root) {
        let entry = entry.unwrap();
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(root)
            .unwrap()
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        files.insert(rel, fs::read(entry.path()).unwrap());
    }
    files
}

fn manager(local_dir: &Path, bucket: &Path) -> VersionManager {
    VersionManager::builder(local_dir, Box::new(HierarchicalResolver))
        .remote(Box::new(FsStore::new(bucket)), Some("prompt-artifacts"))
        .build()
        .unwrap()
}

#[test]
fn snapshot_roundtrip_reproduces_tree() {
    let workspace = TempDir::new().unwrap();
    let bucket = workspace.path().join("bucket");
    let source_dir = workspace.path().join("prompts");
    let restore_dir = workspace.path().join("restored");

    let files = [
        (
            "overview.yaml",
            "overview:\n  description: Top-level overview prompt.\n",
        ),
        (
            "finance/metrics/tvpi.yaml",
            "tvpi:\n  description: TVPI prompt.\n  synonyms:\n    - TVPI\n  extraction_instructions: Extract the multiple.\n",
        ),
        (
            "finance/metrics/irr.yaml",
            "irr:\n  description: IRR prompt.\n  extraction_instructions: Extract the rate.\n",
        ),
    ];
    write_tree(&source_dir, &files);

    let publisher = manager(&source_dir, &bucket);
    let version = publisher.save_snapshot(Bump::Major).unwrap();
    assert_eq!(version, Version::new(1, 0, 0));

    // Drift the source after the snapshot; the restore must not see it.
    fs::write(
        source_dir.join("overview.yaml"),
        "overview:\n  description: Drifted.\n",
    )
    .unwrap();

    let consumer = manager(&restore_dir, &bucket);
    let loaded = consumer.load_snapshot(&Source::Pinned(version), true).unwrap();
    assert_eq!(loaded, version);

    let mut expected: BTreeMap<String, Vec<u8>> = files
        .iter()
        .map(|(rel, content)| (rel.to_string(), content.as_bytes().to_vec()))
        .collect();
    assert_eq!(read_tree(&restore_dir), expected);

    // A second snapshot from the restored tree bumps on top of the first.
    let republished = consumer.save_snapshot(Bump::Minor).unwrap();
    assert_eq!(republished, Version::new(1, 1, 0));
    assert_eq!(
        consumer.list_versions().unwrap(),
        vec![Version::new(1, 1, 0), Version::new(1, 0, 0)]
    );

    // The drifted source tree is still what the publisher sees locally.
    expected.insert(
        "overview.yaml".to_string(),
        b"overview:\n  description: Drifted.\n".to_vec(),
    );
    assert_eq!(read_tree(&source_dir), expected);
}

#[test]
fn latest_resolves_across_managers() {
    let workspace = TempDir::new().unwrap();
    let bucket = workspace.path().join("bucket");
    let source_dir = workspace.path().join("prompts");

    write_tree(
        &source_dir,
        &[("team/greeting.yaml", "greeting:\n  description: Hello.\n")],
    );

    let publisher = manager(&source_dir, &bucket);
    publisher.save_snapshot(Bump::Major).unwrap();

    write_tree(
        &source_dir,
        &[("team/greeting.yaml", "greeting:\n  description: Hello again.\n")],
    );
    publisher.save_snapshot(Bump::Patch).unwrap();

    let reader = manager(&workspace.path().join("elsewhere"), &bucket);
    let doc = reader
        .load_prompt(
            &["team".to_string(), "greeting".to_string()],
            &Source::Latest,
        )
        .unwrap();
    assert_eq!(
        doc.extract_field("greeting", "description").unwrap().as_str(),
        Some("Hello again.")
    );
}
