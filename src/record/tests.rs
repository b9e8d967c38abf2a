use super::*;
use crate::key::parse_keys;

fn keys(s: &str) -> Vec<Key> {
    parse_keys(s).unwrap()
}

#[test]
fn test_get_and_set() {
    let mut record = CommandRecord::new();
    assert!(record.is_empty());
    assert_eq!(record.get(Slot::KeysPre), None);

    record.set(Slot::KeysPre, keys("dw"));
    assert_eq!(record.get(Slot::KeysPre), Some(&SlotValue::Keys(keys("dw"))));

    record.set(Slot::KeysPre, keys("x"));
    assert_eq!(record.keys(Slot::KeysPre).unwrap(), keys("x").as_slice());
}

#[test]
fn test_set_many() {
    let mut record = CommandRecord::new();
    record.set_many([
        (Slot::Name, SlotValue::Name("delete".to_string())),
        (Slot::StateBegin, SlotValue::Mode(Mode::Normal)),
        (Slot::KeysPre, SlotValue::Keys(keys("d"))),
    ]);

    assert_eq!(record.command_name(), Some("delete"));
    assert_eq!(record.begin_mode(), Some(Mode::Normal));
    assert_eq!(record.keys(Slot::KeysPre).unwrap(), keys("d").as_slice());
}

#[test]
fn test_append_sets_when_absent() {
    let mut record = CommandRecord::new();
    record.append(Slot::KeysMotionPre, keys("w")).unwrap();
    assert_eq!(record.keys(Slot::KeysMotionPre).unwrap(), keys("w").as_slice());
}

#[test]
fn test_append_concatenates_in_call_order() {
    let mut record = CommandRecord::new();
    record.append(Slot::KeysMotionPost, keys("w")).unwrap();
    record.append(Slot::KeysMotionPost, keys("w")).unwrap();
    record.append(Slot::KeysMotionPost, keys("2e")).unwrap();
    assert_eq!(
        record.keys(Slot::KeysMotionPost).unwrap(),
        keys("ww2e").as_slice()
    );
}

#[test]
fn test_append_onto_non_sequence_is_type_mismatch() {
    let mut record = CommandRecord::new();
    record.set(Slot::KeysMotionPre, SlotValue::Count(3));

    let err = record.append(Slot::KeysMotionPre, keys("w")).unwrap_err();
    assert_eq!(err.kind, ErrorType::TypeMismatch);
    assert!(err.contains_msg("keys-motion-pre"));
    // Slot left untouched
    assert_eq!(record.get(Slot::KeysMotionPre), Some(&SlotValue::Count(3)));
}

#[test]
fn test_append_non_sequence_value_is_type_mismatch() {
    let mut record = CommandRecord::new();
    let err = record.append(Slot::KeysPre, Mode::Insert).unwrap_err();
    assert_eq!(err.kind, ErrorType::TypeMismatch);
    assert!(record.get(Slot::KeysPre).is_none());
}

#[test]
fn test_keys_reads_absent_as_empty() {
    let mut record = CommandRecord::new();
    assert!(record.keys(Slot::KeysPost).unwrap().is_empty());

    record.set(Slot::KeysPost, Mode::Visual);
    assert_eq!(
        record.keys(Slot::KeysPost).unwrap_err().kind,
        ErrorType::TypeMismatch
    );
}

#[test]
fn test_replay_accessors_defaults() {
    let record = CommandRecord::new();
    assert!(record.resolved_keys().is_empty());
    assert_eq!(record.resolved_count(), 1);
    assert_eq!(record.command_name(), None);
    assert_eq!(record.begin_mode(), None);
    assert_eq!(record.end_mode(), None);
    assert_eq!(record.last_input(), None);
}

#[test]
fn test_replay_accessors() {
    let mut record = CommandRecord::new();
    record.set(Slot::Keys, keys("d2w"));
    record.set(Slot::KeysCount, SlotValue::Count(3));
    record.set(Slot::StateEnd, Mode::Insert);
    record.set(Slot::LastInput, Key::Char('w'));

    assert_eq!(record.resolved_keys(), keys("d2w").as_slice());
    assert_eq!(record.resolved_count(), 3);
    assert_eq!(record.end_mode(), Some(Mode::Insert));
    assert_eq!(record.last_input(), Some(Key::Char('w')));
}

#[test]
fn test_slot_names() {
    assert_eq!(Slot::KeysMotionPre.to_string(), "keys-motion-pre");
    assert_eq!(Slot::StateBegin.to_string(), "evil-state-begin");
    assert_eq!(":keys-operator-post".parse::<Slot>().unwrap(), Slot::KeysOperatorPost);
    for slot in Slot::ALL {
        assert_eq!(slot.as_str().parse::<Slot>().unwrap(), slot);
    }
    assert!("keys-sideways".parse::<Slot>().is_err());
}

#[test]
fn test_mode_tags_parse() {
    for mode in Mode::ALL {
        assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
    }
    assert_eq!("Operator".parse::<Mode>().unwrap(), Mode::Operator);
    assert!("command".parse::<Mode>().is_err());
}

#[test]
fn test_display_summary() {
    let mut record = CommandRecord::new();
    record.set(Slot::Name, SlotValue::Name("delete".to_string()));
    record.set(Slot::StateBegin, Mode::Normal);
    record.set(Slot::StateEnd, Mode::Normal);
    record.set(Slot::KeysPre, keys("d"));
    record.set(Slot::KeysOperatorPre, keys("2w"));
    record.set(Slot::KeysOperatorPost, Vec::<Key>::new());
    record.set(Slot::Keys, keys("d2w"));

    assert_eq!(
        record.to_string(),
        "delete keys=d2w count=1 state=normal->normal keys-pre=d keys-operator-pre=2w"
    );
}
