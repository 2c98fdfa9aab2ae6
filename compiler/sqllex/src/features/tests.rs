use super::*;
use pretty_assertions::assert_eq;

#[test]
fn empty_by_default() {
    let set = FeatureSet::new();
    assert!(set.is_empty());
    assert!(!set.contains(AUTO_RANDOM));
}

#[test]
fn register_is_idempotent() {
    let mut set = FeatureSet::new();
    assert!(set.register(AUTO_RANDOM));
    assert!(!set.register(AUTO_RANDOM));
    assert!(!set.register(String::from("auto_rand")));
    assert_eq!(set.len(), 1);
    assert!(set.contains("auto_rand"));
}

#[test]
fn ids_are_case_sensitive() {
    let set: FeatureSet = ["test"].into_iter().collect();
    assert!(set.contains("test"));
    assert!(!set.contains("TEST"));
}

#[test]
fn contains_any_needs_one_match() {
    let set: FeatureSet = [AUTO_RANDOM, CLUSTERED_INDEX].into_iter().collect();
    assert!(set.contains_any(&["unsupported", "auto_rand"]));
    assert!(set.contains_any(&[String::from("clustered_index")]));
    assert!(!set.contains_any(&["unsupported", "other"]));
    assert!(!set.contains_any::<&str>(&[]));
}

#[test]
fn extend_registers_each() {
    let mut set = FeatureSet::new();
    set.extend([AUTO_ID_CACHE, AUTO_RANDOM_BASE, AUTO_ID_CACHE]);
    let mut ids: Vec<&str> = set.iter().collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![AUTO_ID_CACHE, AUTO_RANDOM_BASE]);
}
