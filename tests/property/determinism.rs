//! Property-based tests for determinism guarantees

use proptest::prelude::*;
use sml_manifest::types::{FileEntry, Manifest};
use sml_manifest::version::derive_version;

fn file_entry() -> impl Strategy<Value = FileEntry> {
    ("[a-zA-Z0-9_./-]{1,24}", "[0-9a-f]{64}", any::<u64>()).prop_map(|(path, hash, size)| {
        FileEntry { path, hash, size }
    })
}

fn unique_entries() -> impl Strategy<Value = Vec<FileEntry>> {
    prop::collection::vec(file_entry(), 0..16).prop_map(|mut entries| {
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        entries.dedup_by(|a, b| a.path == b.path);
        entries
    })
}

proptest! {
    /// Same entries always derive the same version
    #[test]
    fn version_is_deterministic(entries in unique_entries()) {
        prop_assert_eq!(derive_version(&entries), derive_version(&entries.clone()));
    }

    /// Enumeration order before sorting never leaks into the manifest
    #[test]
    fn manifest_is_insensitive_to_input_order(
        entries in unique_entries(),
        seed in any::<u64>(),
    ) {
        let mut shuffled = entries.clone();
        // Deterministic permutation driven by the seed
        let len = shuffled.len();
        if len > 1 {
            let mut state = seed;
            for i in (1..len).rev() {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                let j = (state % (i as u64 + 1)) as usize;
                shuffled.swap(i, j);
            }
        }

        let a = Manifest::new("UI.sml", entries);
        let b = Manifest::new("UI.sml", shuffled);
        prop_assert_eq!(a, b);
    }

    /// Manifest files are sorted ascending by path bytes
    #[test]
    fn manifest_files_are_sorted(entries in unique_entries()) {
        let manifest = Manifest::new("UI.sml", entries);
        for pair in manifest.files.windows(2) {
            prop_assert!(pair[0].path.as_bytes() < pair[1].path.as_bytes());
        }
    }

    /// Version identifiers always have the same shape
    #[test]
    fn version_shape(entries in unique_entries()) {
        let version = derive_version(&entries);
        prop_assert!(version.starts_with("auto-"));
        prop_assert_eq!(version.len(), 21);
    }

    /// Changing any size changes the version
    #[test]
    fn size_change_changes_version(entries in unique_entries().prop_filter("non-empty", |e| !e.is_empty())) {
        let before = derive_version(&entries);
        let mut changed = entries.clone();
        changed[0].size = changed[0].size.wrapping_add(1);
        prop_assert_ne!(before, derive_version(&changed));
    }
}
