use rand::Rng;
use rand::seq::SliceRandom;

use quiz_core::model::FoodItem;

/// Produces the question order for one session: an unbiased permutation of
/// every item, each exactly once.
pub fn build_order<R: Rng + ?Sized>(all_items: &[FoodItem], rng: &mut R) -> Vec<FoodItem> {
    let mut ordered = all_items.to_vec();
    ordered.as_mut_slice().shuffle(rng);
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::default_catalog;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn order_is_a_permutation_of_the_table() {
        let catalog = default_catalog();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let order = build_order(catalog.items(), &mut rng);
            assert_eq!(order.len(), catalog.len());

            let ids: HashSet<_> = order.iter().map(|item| item.id().clone()).collect();
            assert_eq!(ids.len(), catalog.len());
            assert!(catalog.items().iter().all(|item| ids.contains(item.id())));
        }
    }

    #[test]
    fn order_varies_between_sessions() {
        let catalog = default_catalog();
        let mut rng = StdRng::seed_from_u64(42);
        let first = build_order(catalog.items(), &mut rng);
        let reshuffled = (0..10).any(|_| build_order(catalog.items(), &mut rng) != first);
        assert!(reshuffled);
    }

    #[test]
    fn empty_table_gives_empty_order() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(build_order(&[], &mut rng).is_empty());
    }
}
