use objmangle_core::{Error, Seed};
use rand::RngCore;

const SEED_HEX: &str = "0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef";

#[test]
fn test_deterministic_rng() {
    let seed = Seed::from_hex(SEED_HEX).unwrap();

    let mut rng1 = seed.create_deterministic_rng();
    let mut rng2 = seed.create_deterministic_rng();

    assert_eq!(rng1.next_u32(), rng2.next_u32());
    assert_eq!(rng1.next_u64(), rng2.next_u64());
}

#[test]
fn test_hex_round_trip() {
    let seed = Seed::from_hex(SEED_HEX).unwrap();
    assert_eq!(seed.to_hex(), SEED_HEX);
    assert_eq!(Seed::from_hex(&SEED_HEX[2..]).unwrap(), seed);
}

#[test]
fn test_rejects_bad_seeds() {
    assert!(matches!(
        Seed::from_hex("0x1234"),
        Err(Error::InvalidSeedLength(4))
    ));
    let not_hex = "z".repeat(64);
    assert!(matches!(Seed::from_hex(&not_hex), Err(Error::InvalidSeedHex)));
}

#[test]
fn test_debug_hides_seed() {
    let seed = Seed::from_hex(SEED_HEX).unwrap();
    let printed = format!("{seed:?}");
    assert!(printed.contains(&seed.hash_hex()));
    assert!(!printed.contains(&SEED_HEX[2..]));
}

#[test]
fn test_different_seeds_different_rngs() {
    let seed1 =
        Seed::from_hex("0x1111111111111111111111111111111111111111111111111111111111111111")
            .unwrap();
    let seed2 =
        Seed::from_hex("0x2222222222222222222222222222222222222222222222222222222222222222")
            .unwrap();

    let mut rng1 = seed1.create_deterministic_rng();
    let mut rng2 = seed2.create_deterministic_rng();

    assert_ne!(rng1.next_u64(), rng2.next_u64());
}
