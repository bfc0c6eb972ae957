use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

use crate::domain::sampling::draw_question_ids;

fn rng(seed: u64) -> ChaCha12Rng {
    ChaCha12Rng::seed_from_u64(seed)
}

#[test]
fn small_bank_caps_the_draw() {
    // Asking for 10 questions from a bank of 3 selects all 3, once each.
    let bank = vec![11, 22, 33];
    let mut drawn = draw_question_ids(&mut rng(7), &bank, 10);
    assert_eq!(drawn.len(), 3);
    drawn.sort_unstable();
    assert_eq!(drawn, bank);
}

#[test]
fn draw_is_without_replacement() {
    let bank: Vec<i64> = (1..=20).collect();
    let drawn = draw_question_ids(&mut rng(42), &bank, 12);
    assert_eq!(drawn.len(), 12);

    let mut unique = drawn.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), drawn.len());
    assert!(drawn.iter().all(|id| bank.contains(id)));
}

#[test]
fn draw_is_deterministic_for_a_fixed_seed() {
    let bank: Vec<i64> = (1..=50).collect();
    assert_eq!(
        draw_question_ids(&mut rng(1234), &bank, 10),
        draw_question_ids(&mut rng(1234), &bank, 10)
    );
}

#[test]
fn empty_bank_draws_nothing() {
    assert!(draw_question_ids(&mut rng(1), &[], 10).is_empty());
}

#[test]
fn zero_requested_draws_nothing() {
    assert!(draw_question_ids(&mut rng(1), &[1, 2, 3], 0).is_empty());
}
