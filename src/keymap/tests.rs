use super::*;

fn keys(s: &str) -> Vec<Key> {
    parse_keys(s).unwrap()
}

#[test]
fn test_register_and_binding() {
    let mut map = KeyMap::new();
    map.register(Key::Char('j'), "next-line");

    assert_eq!(map.binding(&keys("j")), Some("next-line"));
    assert_eq!(map.binding(&keys("k")), None);
    assert_eq!(map.len(), 1);
}

#[test]
fn test_sequence() {
    let mut map = KeyMap::new();
    map.register_str("gg", "goto-first-line").unwrap();

    // Partial match
    assert_eq!(map.lookup(&keys("g")), MatchResult::Prefix);

    // Exact match
    assert_eq!(map.lookup(&keys("gg")), MatchResult::Exact("goto-first-line"));

    // No match
    assert_eq!(map.lookup(&keys("x")), MatchResult::None);
    assert_eq!(map.lookup(&[]), MatchResult::None);
}

#[test]
fn test_ambiguous_prefix() {
    let mut map = KeyMap::new();
    map.register(Key::Char('d'), "delete");
    map.register_str("dd", "delete-line").unwrap();

    assert_eq!(map.lookup(&keys("d")), MatchResult::Ambiguous("delete"));
    assert_eq!(map.lookup(&keys("dd")), MatchResult::Exact("delete-line"));
    assert_eq!(map.binding(&keys("d")), Some("delete"));
}

#[test]
fn test_register_str_rejects_bad_notation() {
    let mut map = KeyMap::new();
    assert!(map.register_str("<Bogus>", "nothing").is_err());
    assert!(map.is_empty());
}

#[test]
fn test_longest_bound_prefix() {
    let map = KeyMap::vim_defaults();

    // Operator followed by its motion: only the operator is the command
    assert_eq!(map.longest_bound_prefix(&keys("d2w")), Some(1));
    assert_eq!(map.longest_bound_prefix(&keys("dd")), Some(2));
    assert_eq!(map.longest_bound_prefix(&keys("gUw")), Some(2));
    assert_eq!(map.longest_bound_prefix(&keys("w")), Some(1));
    // Dangling prefix binds nothing
    assert_eq!(map.longest_bound_prefix(&keys("g")), None);
    assert_eq!(map.longest_bound_prefix(&keys("Q")), None);
}

#[test]
fn test_vim_defaults() {
    let map = KeyMap::vim_defaults();
    assert_eq!(map.binding(&keys("t")), Some("find-char-to"));
    assert_eq!(map.binding(&keys("<lt>")), Some("shift-left"));
    assert_eq!(map.binding(&keys("<C-r>")), Some("redo"));
    assert_eq!(map.lookup(&keys("g")), MatchResult::Prefix);
}
