use super::*;
use crate::error::ErrorType;

#[test]
fn test_digit() {
    assert_eq!(Key::Char('0').digit(), Some(0));
    assert_eq!(Key::Char('7').digit(), Some(7));
    assert_eq!(Key::Char('w').digit(), None);
    assert_eq!(Key::Ctrl('3').digit(), None);
}

#[test]
fn test_display_plain_and_special() {
    assert_eq!(Key::Char('d').to_string(), "d");
    assert_eq!(Key::Escape.to_string(), "<Esc>");
    assert_eq!(Key::Ctrl('w').to_string(), "<C-w>");
    assert_eq!(Key::Alt('x').to_string(), "<M-x>");
    assert_eq!(Key::F(5).to_string(), "<F5>");
    assert_eq!(Key::Char('<').to_string(), "<lt>");
    assert_eq!(Key::Char(' ').to_string(), "<Space>");
}

#[test]
fn test_parse_keys_plain() {
    assert_eq!(
        parse_keys("d2w").unwrap(),
        vec![Key::Char('d'), Key::Char('2'), Key::Char('w')]
    );
    assert!(parse_keys("").unwrap().is_empty());
}

#[test]
fn test_parse_keys_named() {
    assert_eq!(
        parse_keys("ciw<Esc>").unwrap(),
        vec![
            Key::Char('c'),
            Key::Char('i'),
            Key::Char('w'),
            Key::Escape
        ]
    );
    assert_eq!(
        parse_keys("<C-r>a<lt><cr>").unwrap(),
        vec![Key::Ctrl('r'), Key::Char('a'), Key::Char('<'), Key::Enter]
    );
    assert_eq!(parse_keys("<F12>").unwrap(), vec![Key::F(12)]);
}

#[test]
fn test_parse_keys_malformed() {
    let err = parse_keys("d<Esc").unwrap_err();
    assert_eq!(err.kind, ErrorType::MalformedKeyVector);
    assert!(err.contains_msg("unterminated"));

    let err = parse_keys("<Nope>").unwrap_err();
    assert_eq!(err.kind, ErrorType::MalformedKeyVector);
    assert!(err.contains_msg("<Nope>"));

    assert!(parse_keys("<F13>").is_err());
}

#[test]
fn test_format_parses_back() {
    let keys = vec![
        Key::Char('c'),
        Key::Char('t'),
        Key::Char(' '),
        Key::Char('x'),
        Key::Escape,
        Key::Ctrl('o'),
        Key::ArrowLeft,
    ];
    let text = format_keys(&keys);
    assert_eq!(text, "ct<Space>x<Esc><C-o><Left>");
    assert_eq!(parse_keys(&text).unwrap(), keys);
}

#[test]
fn test_translate_key_event() {
    let ev = |code, modifiers| KeyEvent::new(code, modifiers);
    assert_eq!(
        translate_key_event(ev(KeyCode::Char('w'), KeyModifiers::NONE)),
        Some(Key::Char('w'))
    );
    assert_eq!(
        translate_key_event(ev(KeyCode::Char('W'), KeyModifiers::CONTROL)),
        Some(Key::Ctrl('w'))
    );
    assert_eq!(
        translate_key_event(ev(KeyCode::Char('b'), KeyModifiers::ALT)),
        Some(Key::Alt('b'))
    );
    assert_eq!(
        translate_key_event(ev(KeyCode::Char('\r'), KeyModifiers::NONE)),
        Some(Key::Enter)
    );
    assert_eq!(
        translate_key_event(ev(KeyCode::Esc, KeyModifiers::NONE)),
        Some(Key::Escape)
    );
    assert_eq!(
        translate_key_event(ev(KeyCode::F(3), KeyModifiers::NONE)),
        Some(Key::F(3))
    );
    assert_eq!(
        translate_key_event(ev(KeyCode::CapsLock, KeyModifiers::NONE)),
        None
    );
}
