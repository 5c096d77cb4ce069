//! End-to-end behaviour of the generator core through the public API.

use passform::pass::charset::{DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};
use passform::{
    CharacterClass, CharacterClassSelection, GenerationError, Rand, Sequence, Session,
    SessionError, SessionState, Status, ValidationError, generate, validate,
};

fn all_chars() -> String {
    format!("{UPPERCASE}{LOWERCASE}{DIGITS}{SYMBOLS}")
}

#[test]
fn lowercase_and_digits_length_8() {
    let mut session = Session::new();
    session
        .update_class_selection(CharacterClass::Digits, true)
        .unwrap();
    let password = session.request_generate("8").unwrap().to_owned();

    assert_eq!(password.len(), 8);
    let allowed = format!("{LOWERCASE}{DIGITS}");
    assert!(password.chars().all(|c| allowed.contains(c)), "{password}");
}

#[test]
fn validation_scenarios() {
    assert_eq!(validate("2"), Err(ValidationError::TooShort));
    assert_eq!(validate("20"), Err(ValidationError::TooLong));
    assert_eq!(
        validate("8abc"),
        Err(ValidationError::NotANumber { empty: false })
    );
    assert_eq!(validate(""), Err(ValidationError::NotANumber { empty: true }));
    for n in 4..=16 {
        assert_eq!(validate(&n.to_string()).unwrap().get(), n);
    }
}

#[test]
fn digits_only_length_10() {
    let selection = CharacterClassSelection::only(CharacterClass::Digits);
    let password = generate(&selection, validate("10").unwrap(), &mut Rand::new()).unwrap();
    assert_eq!(password.len(), 10);
    assert!(password.as_str().chars().all(|c| DIGITS.contains(c)));
}

#[test]
fn all_classes_draw_from_74_chars() {
    let alphabet = all_chars();
    assert_eq!(alphabet.len(), 74);

    let mut rng = Rand::new();
    for _ in 0..50 {
        let password =
            generate(&CharacterClassSelection::ALL, validate("16").unwrap(), &mut rng).unwrap();
        assert_eq!(password.len(), 16);
        assert!(password.as_str().chars().all(|c| alphabet.contains(c)));
    }
}

#[test]
fn deterministic_source_gives_exact_strings() {
    let mut seq = Sequence::new(vec![73, 62, 61, 52, 51, 26, 25, 0]);
    let password = generate(&CharacterClassSelection::ALL, validate("8").unwrap(), &mut seq)
        .unwrap();
    assert_eq!(password.as_str(), "+!90zaZA");
}

#[test]
fn repeated_generates_keep_length() {
    let mut session = Session::new();
    session
        .update_class_selection(CharacterClass::Uppercase, true)
        .unwrap();
    let first = session.request_generate("16").unwrap().to_owned();
    let second = session.request_generate("16").unwrap().to_owned();
    assert_eq!(first.len(), 16);
    assert_eq!(second.len(), 16);
}

#[test]
fn empty_selection_is_an_error_not_a_panic() {
    let result = generate(
        &CharacterClassSelection::NONE,
        validate("8").unwrap(),
        &mut Rand::new(),
    );
    assert_eq!(result, Err(GenerationError::EmptyAlphabet));
}

#[test]
fn reset_is_idempotent_from_any_state() {
    let mut session = Session::with_rng(Sequence::new(vec![3, 1, 4, 1, 5, 9]));

    assert_eq!(session.reset(), &SessionState::default());

    session
        .update_class_selection(CharacterClass::Symbols, true)
        .unwrap();
    session.request_generate("6").unwrap();
    assert!(matches!(session.state().status, Status::Generated(_)));

    let err = session.request_generate("99").unwrap_err();
    assert_eq!(err, SessionError::Length(ValidationError::TooLong));
    assert!(session.is_generated());

    for _ in 0..2 {
        let state = session.reset();
        assert_eq!(state.status, Status::Idle);
        assert_eq!(state.selection, CharacterClassSelection::default());
        assert_eq!(state.length_text, "");
        assert_eq!(session.password(), "");
    }
}
