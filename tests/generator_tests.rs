use pretty_assertions::{assert_eq, assert_ne};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod common;
use common::mac_pattern;
use mac_generator::{Delimiter, MacGenerator};

#[test]
fn test_generate_exact_count() {
    let mut generator = MacGenerator::seeded(1);

    for count in [1, 2, 10, 257] {
        let addresses = generator.generate(count, Delimiter::Colon);
        assert_eq!(addresses.len(), count);
    }
}

#[test]
fn test_generate_colon_format() {
    let pattern = mac_pattern(Delimiter::Colon);
    let mut generator = MacGenerator::seeded(2);

    for mac in generator.generate(200, Delimiter::Colon) {
        let token = mac.to_string();
        assert!(pattern.is_match(&token), "unexpected token {token}");
        assert_eq!(mac.delimiter(), Delimiter::Colon);
    }
}

#[test]
fn test_generate_hyphen_format() {
    let pattern = mac_pattern(Delimiter::Hyphen);
    let mut generator = MacGenerator::seeded(3);

    for mac in generator.generate(200, Delimiter::Hyphen) {
        let token = mac.to_string();
        assert!(pattern.is_match(&token), "unexpected token {token}");
        assert!(!token.contains(':'));
    }
}

#[test]
fn test_same_seed_same_sequence() {
    // What it tests: Two generators built from the same seed produce the same
    // ordered batch, and a different seed produces a different one.
    //
    // Why it's valuable: The random source is injected rather than global, so
    // reproducible batches (the `--seed` flag, and every other test here) rely
    // on this.
    let first = MacGenerator::seeded(42).generate(20, Delimiter::Colon);
    let second = MacGenerator::seeded(42).generate(20, Delimiter::Colon);
    let other = MacGenerator::seeded(43).generate(20, Delimiter::Colon);

    assert_eq!(first, second);
    assert_ne!(first, other);
}

#[test]
fn test_injected_rng() {
    let mut injected = MacGenerator::new(StdRng::seed_from_u64(9));
    let mut seeded = MacGenerator::seeded(9);

    assert_eq!(
        injected.generate(5, Delimiter::Hyphen),
        seeded.generate(5, Delimiter::Hyphen)
    );
}

#[test]
fn test_successive_batches_continue_the_stream() {
    let mut generator = MacGenerator::seeded(5);
    let first = generator.generate(3, Delimiter::Colon);
    let second = generator.generate(3, Delimiter::Colon);

    let whole = MacGenerator::seeded(5).generate(6, Delimiter::Colon);
    assert_eq!([first, second].concat(), whole);
}

#[test]
fn test_delimiter_only_changes_rendering() {
    let colon = MacGenerator::seeded(11).generate(4, Delimiter::Colon);
    let hyphen = MacGenerator::seeded(11).generate(4, Delimiter::Hyphen);

    for (c, h) in colon.iter().zip(&hyphen) {
        assert_eq!(c.octets(), h.octets());
        assert_eq!(c.to_string().replace(':', "-"), h.to_string());
    }
}

#[test]
fn test_time_seeded_generator() {
    let pattern = mac_pattern(Delimiter::Colon);
    let addresses = MacGenerator::from_time().generate(10, Delimiter::Colon);

    assert_eq!(addresses.len(), 10);
    assert!(addresses.iter().all(|mac| pattern.is_match(&mac.to_string())));
}
