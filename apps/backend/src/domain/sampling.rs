use rand::seq::index;
use rand::Rng;

/// Draw up to `want` distinct question ids uniformly from `bank`.
///
/// Returns fewer than `want` when the bank is smaller. The returned order is
/// the play order, itself uniformly random. The random source is injected so
/// tests can drive the selection deterministically.
pub fn draw_question_ids<R: Rng + ?Sized>(rng: &mut R, bank: &[i64], want: usize) -> Vec<i64> {
    let amount = want.min(bank.len());
    index::sample(rng, bank.len(), amount)
        .into_iter()
        .map(|i| bank[i])
        .collect()
}
