use rngkit::utils::{default_seed, mix_seed, rotate_left};

#[test]
fn rotate_left_moves_bits_up() {
    assert_eq!(rotate_left(0b1u64, 1), 0b10);
    assert_eq!(rotate_left(0b1u32, 31), 0x8000_0000);
}

#[test]
fn rotate_left_wraps_high_bits() {
    assert_eq!(rotate_left(0x8000_0000_0000_0001u64, 4), 0x18);
    assert_eq!(rotate_left(0xf000_0000u32, 4), 0xf);
}

#[test]
fn rotate_by_full_width_is_identity() {
    let x = 0x0123_4567_89ab_cdefu64;
    assert_eq!(rotate_left(x, 64), x);
    assert_eq!(rotate_left(x, 0), x);
    assert_eq!(rotate_left(0xdead_beefu32, 32), 0xdead_beef);
}

#[test]
fn mix_seed_matches_splitmix64() {
    // First two outputs of SplitMix64 started from state 0.
    assert_eq!(mix_seed(0), 0xe220_a839_7b1d_cdaf);
    assert_eq!(mix_seed(0x9e37_79b9_7f4a_7c15), 0x6e78_9e6a_a1b9_65f4);
}

#[test]
fn mix_seed_is_not_identity_on_neighbours() {
    let a = mix_seed(1);
    let b = mix_seed(2);
    assert_ne!(a, b);
    assert!((a ^ b).count_ones() > 10);
}

#[test]
fn default_seed_is_second_of_day() {
    assert!(default_seed() < 86_400);
    assert_eq!(default_seed(), default_seed());
}
