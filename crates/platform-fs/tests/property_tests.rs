#![cfg(unix)]

use platform_fs::path;
use proptest::prelude::*;

fn segment() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-][a-zA-Z0-9_.-]{0,11}"
}

proptest! {
    #[test]
    fn normalized_paths_are_absolute_and_clean(segments in prop::collection::vec(segment(), 0..6)) {
        let raw = format!("/{}/", segments.join("//"));
        let normalized = path::normalize(&raw);

        prop_assert!(normalized.starts_with('/'));
        prop_assert!(!normalized.contains("//"));
        prop_assert!(normalized == "/" || !normalized.ends_with('/'));
    }

    #[test]
    fn normalize_is_idempotent(segments in prop::collection::vec(segment(), 1..6)) {
        let once = path::normalize(&segments.join("/"));
        prop_assert_eq!(path::normalize(&once), once.clone());
    }

    #[test]
    fn joined_path_extends_left(base in prop::collection::vec(segment(), 1..4), child in segment()) {
        let left = format!("/{}", base.join("/"));
        let joined = path::join(&left, &child);

        let normalized_left = path::normalize(&left);
        prop_assert!(joined.starts_with(&normalized_left));
        prop_assert!(joined.ends_with(&child));
    }

    #[test]
    fn multi_element_join_matches_fold(segments in prop::collection::vec(segment(), 2..6)) {
        let mut first = segments.clone();
        first[0] = format!("/{}", first[0]);

        let folded = first[1..]
            .iter()
            .fold(first[0].clone(), |acc, s| path::join(&acc, s));

        prop_assert_eq!(path::join_all(&first), path::normalize(&folded));
    }
}
