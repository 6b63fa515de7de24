//! Property tests for the tree publisher against the local file system.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use proptest::prelude::*;
use tempfile::TempDir;

use vendorpub::domain::value_objects::ConflictPolicy;
use vendorpub::infrastructure::LocalFs;
use vendorpub::TreePublisher;

/// Relative file paths whose directory and file names never collide
fn tree() -> impl Strategy<Value = BTreeSet<String>> {
    let dir = proptest::string::string_regex("d[a-c]").unwrap();
    let file = proptest::string::string_regex("f[0-9]\\.txt").unwrap();
    let entry = (proptest::collection::vec(dir, 0..=3), file).prop_map(|(dirs, file)| {
        let mut parts = dirs;
        parts.push(file);
        parts.join("/")
    });
    proptest::collection::btree_set(entry, 0..12)
}

fn write_tree(root: &Path, files: &BTreeSet<String>) {
    fs::create_dir_all(root).unwrap();
    for relative in files {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, format!("content of {}", relative)).unwrap();
    }
}

fn snapshot(root: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    let mut out = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                stack.push(path);
            } else {
                out.push((path.clone(), fs::read(&path).unwrap()));
            }
        }
    }
    out.sort();
    out
}

struct Fixture {
    _dir: TempDir,
    source: PathBuf,
    destination: PathBuf,
}

fn fixture(files: &BTreeSet<String>) -> Fixture {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("vendor/acme/widgets/public");
    let destination = dir.path().join("public/widgets");
    write_tree(&source, files);
    fs::create_dir_all(dir.path().join("public")).unwrap();
    Fixture {
        _dir: dir,
        source,
        destination,
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every written path and created directory is below the destination.
    #[test]
    fn property_publish_never_escapes_destination(
        files in tree()
    ) {
        let fx = fixture(&files);
        let engine = TreePublisher::new(LocalFs::new());

        let result = engine.publish(&fx.source, &fx.destination, ConflictPolicy::Overwrite);

        prop_assert!(result.is_success());
        prop_assert_eq!(result.copied, files.len());
        prop_assert!(result.written.iter().all(|p| p.starts_with(&fx.destination)));
        prop_assert!(result.created_dirs.iter().all(|p| p.starts_with(&fx.destination)));

        let plan = engine.plan(&fx.source, &fx.destination).unwrap();
        prop_assert!(plan.entries().iter().all(|e| e.destination.starts_with(&fx.destination)));
    }

    /// PROPERTY: planning the same tree twice yields the same ordered plan.
    #[test]
    fn property_plan_is_deterministic(
        files in tree()
    ) {
        let fx = fixture(&files);
        let engine = TreePublisher::new(LocalFs::new());

        let first = engine.plan(&fx.source, &fx.destination).unwrap();
        let second = engine.plan(&fx.source, &fx.destination).unwrap();

        prop_assert_eq!(&first, &second);
        let relatives: Vec<_> = first
            .files()
            .map(|e| e.relative.to_slash_string())
            .collect();
        let mut sorted = relatives.clone();
        sorted.sort_by(|a, b| Path::new(a).cmp(Path::new(b)));
        prop_assert_eq!(relatives, sorted);
    }

    /// PROPERTY: overwrite publishing is idempotent.
    #[test]
    fn property_overwrite_is_idempotent(
        files in tree()
    ) {
        let fx = fixture(&files);
        let engine = TreePublisher::new(LocalFs::new());

        let first = engine.publish(&fx.source, &fx.destination, ConflictPolicy::Overwrite);
        let after_first = snapshot(&fx.destination);
        let second = engine.publish(&fx.source, &fx.destination, ConflictPolicy::Overwrite);

        prop_assert_eq!(first.copied, second.copied);
        prop_assert_eq!(second.skipped, 0);
        prop_assert_eq!(after_first, snapshot(&fx.destination));
    }

    /// PROPERTY: skip-if-exists never changes a file that was already there.
    #[test]
    fn property_skip_if_exists_preserves_existing(
        files in tree(),
        keep in proptest::collection::vec(any::<bool>(), 12)
    ) {
        let fx = fixture(&files);
        let existing: BTreeSet<String> = files
            .iter()
            .zip(keep.iter())
            .filter(|(_, keep)| **keep)
            .map(|(f, _)| f.clone())
            .collect();
        for relative in &existing {
            let path = fx.destination.join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, "user edit").unwrap();
        }
        let engine = TreePublisher::new(LocalFs::new());

        let result = engine.publish(&fx.source, &fx.destination, ConflictPolicy::SkipIfExists);

        prop_assert!(result.is_success());
        prop_assert_eq!(result.skipped, existing.len());
        prop_assert_eq!(result.copied, files.len() - existing.len());
        for relative in &existing {
            prop_assert_eq!(fs::read_to_string(fx.destination.join(relative)).unwrap(), "user edit");
        }
    }
}
