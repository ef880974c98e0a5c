use rngkit::rand_core::{RngCore, SeedableRng};
use rngkit::utils::default_seed;
use rngkit::{
    Engine, Pcg32, Xoroshiro128Plus, Xoroshiro128PlusPlus, Xoroshiro128StarStar,
    Xorshift128Plus, Xoshiro256Plus, Xoshiro256PlusPlus, Xoshiro256StarStar,
};

fn take<E: Engine>(engine: &mut E, n: usize) -> Vec<u64> {
    (0..n).map(|_| engine.next()).collect()
}

macro_rules! seeded_engine_tests {
    ($($name:ident: $engine:ty, $words:expr, $seed0:expr;)*) => {$(
        mod $name {
            use super::*;

            #[test]
            fn identical_seeds_give_identical_sequences() {
                let mut a = <$engine>::new(0x5eed);
                let mut b = <$engine>::new(0x5eed);
                assert_eq!(take(&mut a, 256), take(&mut b, 256));
            }

            #[test]
            fn different_seeds_diverge() {
                let mut a = <$engine>::new(1);
                let mut b = <$engine>::new(2);
                assert_ne!(take(&mut a, 4), take(&mut b, 4));
            }

            #[test]
            fn next_advances_state() {
                let mut engine = <$engine>::new(9);
                let before = engine.clone();
                engine.next();
                assert_ne!(engine, before);
            }

            #[test]
            fn seed_zero_outputs() {
                let mut engine = <$engine>::new(0);
                assert_eq!(take(&mut engine, 3), $seed0);
            }

            #[test]
            fn state_shape() {
                assert_eq!(<$engine as Engine>::STATE_WORDS, $words);
            }

            #[test]
            fn seedable_rng_matches_new() {
                assert_eq!(<$engine>::seed_from_u64(77), <$engine>::new(77));
                assert_eq!(<$engine>::from_seed(77u64.to_le_bytes()), <$engine>::new(77));
            }

            #[test]
            fn default_uses_build_seed() {
                assert_eq!(<$engine>::default(), <$engine>::new(default_seed()));
            }

            #[test]
            fn fill_bytes_is_little_endian_next() {
                let mut a = <$engine>::new(3);
                let mut b = <$engine>::new(3);

                let mut buf = [0u8; 16];
                a.fill_bytes(&mut buf);

                assert_eq!(buf[..8], b.next().to_le_bytes());
                assert_eq!(buf[8..], b.next().to_le_bytes());
            }
        }
    )*};
}

seeded_engine_tests! {
    xorshift128plus: Xorshift128Plus, 2,
        [0x732a_d626_0420_2a70, 0xfc29_93e7_9162_c570, 0x7a28_91c0_9af1_f5fa];
    xoroshiro128plus: Xoroshiro128Plus, 2,
        [0x732a_d626_0420_2a70, 0x1376_97d6_31e4_6c84, 0x04d4_eccc_f33d_8847];
    xoroshiro128plusplus: Xoroshiro128PlusPlus, 2,
        [0x8e6c_b079_cffe_b404, 0x49c5_f026_af12_cb2e, 0x416d_6982_8d66_3800];
    xoroshiro128starstar: Xoroshiro128StarStar, 2,
        [0xdec9_0d52_1e93_e35d, 0x2351_af7a_fb1f_e736, 0x268c_f854_3e93_1977];
    xoshiro256plus: Xoshiro256Plus, 4,
        [0xff2b_bd1e_561f_5d9c, 0xe887_22b1_503f_28c3, 0x29f2_c47d_c4e9_4c98];
    xoshiro256plusplus: Xoshiro256PlusPlus, 4,
        [0x714b_b7e8_499d_638d, 0xc6c9_b0c5_8b12_6214, 0x2f19_2561_2ccc_ccc5];
    xoshiro256starstar: Xoshiro256StarStar, 4,
        [0x6509_4a0a_b526_fa3a, 0x1479_0c77_058b_9213, 0x545e_14c0_68d2_cdfc];
    pcg32: Pcg32, 1,
        [0xe823_a24e_7a7e_cbd9, 0x89fd_6c06_ae64_6aa8, 0xcd3c_f945_6204_b303];
}

#[test]
fn next_u32_is_high_half() {
    let mut a = Xoshiro256PlusPlus::new(11);
    let mut b = Xoshiro256PlusPlus::new(11);
    assert_eq!(a.next_u32(), (b.next() >> 32) as u32);
}

#[test]
fn engines_are_usable_through_mutable_references() {
    fn draw<E: Engine>(mut engine: E) -> u64 {
        engine.next()
    }

    let mut owned = Xoroshiro128PlusPlus::new(5);
    let mut copy = owned.clone();

    assert_eq!(draw(&mut owned), copy.next());
    assert_eq!(owned, copy);
}

#[test]
fn per_stream_seeds_give_independent_engines() {
    use rngkit::utils::mix_seed;

    let base = 1234;
    let mut streams: Vec<_> = (0..4)
        .map(|i| Xoshiro256StarStar::new(mix_seed(base + i)))
        .collect();

    let firsts: Vec<u64> = streams.iter_mut().map(|s| s.next()).collect();
    for i in 0..firsts.len() {
        for j in i + 1..firsts.len() {
            assert_ne!(firsts[i], firsts[j]);
        }
    }
}
