use objmangle_core::Seed;
use objmangle_transform::sentence::{EnglishSentenceGenerator, SentenceGenerator};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

#[test]
fn test_same_seed_same_sentences() {
    let seed =
        Seed::from_hex("0x0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef")
            .unwrap();
    let mut first = EnglishSentenceGenerator::from_seed(&seed);
    let mut second = EnglishSentenceGenerator::from_seed(&seed);
    for length in [3, 8, 13, 21] {
        assert_eq!(first.unique_sentence(length), second.unique_sentence(length));
    }
}

#[test]
fn test_sentences_never_repeat() {
    let mut generator = EnglishSentenceGenerator::new(StdRng::seed_from_u64(42));
    let mut seen = HashSet::new();
    for _ in 0..500 {
        let sentence = generator.unique_sentence(6).unwrap();
        assert_eq!(sentence.len(), 6);
        assert!(seen.insert(sentence), "sentence issued twice");
    }
    assert_eq!(generator.issued_count(), 500);
}

#[test]
fn test_two_letter_supply_exhausts() {
    let mut generator = EnglishSentenceGenerator::with_max_attempts(StdRng::seed_from_u64(3), 4096);
    let mut count = 0;
    while generator.unique_sentence(2).is_some() {
        count += 1;
    }
    // 24 two-letter words plus aA, aI, iA and iI
    assert_eq!(count, 28);
    assert_eq!(generator.unique_sentence(2), None);
    // other lengths are unaffected
    assert!(generator.unique_sentence(3).is_some());
}
