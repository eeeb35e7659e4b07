use intro_core::*;

#[test]
fn starts_off_and_silent() {
    let state = AmbientState::default();
    assert!(!state.is_on());
    assert_eq!(state.target_gain(), 0.0);
    assert_eq!(state.label(), AMBIENT_LABEL_OFF);
}

#[test]
fn toggle_ramps_up_then_back_to_silence() {
    let mut state = AmbientState::default();

    let target = state.toggle();
    assert!(state.is_on());
    assert_eq!(target, AMBIENT_GAIN_ON);
    assert_eq!(state.label(), AMBIENT_LABEL_ON);

    let target = state.toggle();
    assert!(!state.is_on());
    assert_eq!(target, 0.0);
    assert_eq!(state.label(), AMBIENT_LABEL_OFF);
}

#[test]
fn target_gain_tracks_the_flag() {
    let mut state = AmbientState::default();
    for _ in 0..5 {
        state.toggle();
        assert_eq!(
            state.target_gain(),
            if state.is_on() { AMBIENT_GAIN_ON } else { 0.0 }
        );
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ambient_constants_are_within_reasonable_bounds() {
    // A background bed, not a foreground tone
    assert!(AMBIENT_GAIN_ON > 0.0 && AMBIENT_GAIN_ON < 0.1);
    assert!(AMBIENT_RAMP_SEC > 0.0);

    // The LFO must be far slower than the drone it modulates
    assert!(LFO_FREQ_HZ < 1.0);
    assert!(DRONE_FREQ_HZ > LFO_FREQ_HZ * 100.0);
    assert!(LFO_DEPTH_HZ < DRONE_FREQ_HZ);
}
