use intro_core::*;

#[test]
fn advance_reveals_one_character_per_tick() {
    let mut typing = TypingReveal::new(TYPED_MESSAGE);
    assert_eq!(typing.visible(), "");
    typing.advance();
    assert_eq!(typing.visible(), "W");
    typing.advance();
    assert_eq!(typing.visible(), "We");
}

#[test]
fn index_is_monotonic_and_capped() {
    let mut typing = TypingReveal::new(TYPED_MESSAGE);
    let len = TYPED_MESSAGE.chars().count();
    let mut prev = typing.index();
    for _ in 0..(len + 50) {
        typing.advance();
        assert!(typing.index() >= prev, "index went backwards");
        assert!(typing.index() <= len, "index exceeded message length");
        prev = typing.index();
    }
    assert!(typing.is_done());
    assert_eq!(typing.visible(), TYPED_MESSAGE);
}

#[test]
fn natural_completion_shows_the_full_message() {
    let mut typing = TypingReveal::new(TYPED_MESSAGE);
    while !typing.is_done() {
        typing.advance();
    }
    assert_eq!(typing.visible(), TYPED_MESSAGE);
    assert_eq!(typing.index(), TYPED_MESSAGE.chars().count());
}

#[test]
fn skip_before_completion_finishes_immediately() {
    let mut typing = TypingReveal::new(TYPED_MESSAGE);
    typing.advance();
    typing.advance();
    assert!(!typing.is_done());
    typing.skip();
    assert!(typing.is_done());
    assert_eq!(typing.visible(), TYPED_MESSAGE);
}

#[test]
fn skip_after_completion_is_a_no_op() {
    let mut typing = TypingReveal::new(TYPED_MESSAGE);
    typing.skip();
    let index = typing.index();
    let text = typing.visible();
    typing.skip();
    assert_eq!(typing.index(), index);
    assert_eq!(typing.visible(), text);
}

#[test]
fn reveal_never_splits_multibyte_characters() {
    let mut typing = TypingReveal::new("héllo ✨ wörld");
    while !typing.is_done() {
        typing.advance();
        // visible() must always be a valid prefix of whole characters
        assert!("héllo ✨ wörld".starts_with(&typing.visible()));
    }
    assert_eq!(typing.visible(), "héllo ✨ wörld");
}

#[test]
fn default_reveal_uses_the_fixed_message() {
    let typing = TypingReveal::default();
    assert_eq!(typing.message(), TYPED_MESSAGE);
    assert_eq!(typing.index(), 0);
}
