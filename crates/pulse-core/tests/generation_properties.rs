//! Property tests over the generator and ranking engine.

use chrono::NaiveDate;
use proptest::prelude::*;
use pulse_core::catalog::{ACTIVITIES, code_for_activity};
use pulse_core::generator::{Preference, generate};
use pulse_core::ranking::rank;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
}

proptest! {
    #[test]
    fn prefix_of_floor_third_carries_preferred_activity(count in 0usize..120, seed in any::<u64>()) {
        // Outside the catalog, so no randomly drawn record can collide with it.
        let preferred = "Handloom Weaving";
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let batch = generate(count, &Preference::new(Some(preferred), Some("5208")), &mut rng, today());

        prop_assert_eq!(batch.len(), count);
        let leading = batch.iter().take_while(|i| i.activity == preferred).count();
        prop_assert_eq!(leading, count / 3);
        prop_assert!(batch.iter().filter(|i| i.activity == preferred).count() == count / 3);
    }

    #[test]
    fn non_prefix_codes_follow_the_catalog(count in 0usize..60, seed in any::<u64>(), pick in 0usize..ACTIVITIES.len()) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let batch = generate(count, &Preference::new(Some(ACTIVITIES[pick]), Some("0001")), &mut rng, today());
        for insight in batch.iter().skip(count / 3) {
            prop_assert_eq!(Some(insight.classification_code.as_str()), code_for_activity(&insight.activity));
        }
    }

    #[test]
    fn ranks_are_dense_and_index_non_increasing(count in 0usize..80, seed in any::<u64>()) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let batch = generate(count, &Preference::default(), &mut rng, today());
        let ranked = rank(&batch, None);

        let ranks: Vec<usize> = ranked.iter().map(|r| r.rank).collect();
        let expected: Vec<usize> = (1..=count).collect();
        prop_assert_eq!(ranks, expected);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].index >= pair[1].index);
        }
    }

    #[test]
    fn rank_is_idempotent(count in 0usize..50, seed in any::<u64>(), viewer in 0usize..ACTIVITIES.len()) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let batch = generate(count, &Preference::default(), &mut rng, today());
        let first = rank(&batch, Some(ACTIVITIES[viewer]));
        let second = rank(&batch, Some(ACTIVITIES[viewer]));
        prop_assert_eq!(first, second);
    }
}
