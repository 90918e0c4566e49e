use std::collections::HashSet;

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use quiz_core::model::FoodItem;

/// Builds the answer options for a multiple-choice question.
///
/// Picks `k - 1` distractors uniformly without replacement from the other
/// items, adds the correct display name and shuffles the result. When the
/// table is too small the list is shorter than `k`. The correct name appears
/// exactly once and no name repeats.
pub fn build_options<R: Rng + ?Sized>(
    correct: &FoodItem,
    all_items: &[FoodItem],
    k: usize,
    rng: &mut R,
) -> Vec<String> {
    let mut seen = HashSet::new();
    seen.insert(correct.display_name());

    let pool: Vec<&str> = all_items
        .iter()
        .filter(|item| item.id() != correct.id())
        .map(FoodItem::display_name)
        .filter(|name| seen.insert(*name))
        .collect();

    let wanted = k.saturating_sub(1);
    let mut options: Vec<String> = pool
        .choose_multiple(rng, wanted)
        .map(|name| (*name).to_string())
        .collect();
    options.push(correct.display_name().to_string());
    options.shuffle(rng);
    options
}
