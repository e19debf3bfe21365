use braidplane_words::{component_count, embed, Generator, Word};
use proptest::prelude::*;

const MAX_WORD_LEN: usize = 24;

fn generator_strategy() -> impl Strategy<Value = Generator> {
    prop::sample::select(Generator::ALL.to_vec())
}

fn word_strategy() -> impl Strategy<Value = Word> {
    prop::collection::vec(generator_strategy(), 0..=MAX_WORD_LEN)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        failure_persistence: None,
        ..ProptestConfig::default()
    })]

    #[test]
    fn component_count_is_total_and_in_range(word in word_strategy()) {
        let count = component_count(&word).expect("mismatch count 1 is unreachable");
        prop_assert!((1..=3).contains(&count));
    }

    #[test]
    fn component_count_ignores_orientation(word in word_strategy(), flips in prop::collection::vec(any::<bool>(), MAX_WORD_LEN + 1)) {
        // Flip the orientation of an arbitrary subset of symbols.
        let flipped: Word = word
            .iter()
            .zip(&flips)
            .map(|(&g, &flip)| if flip { g.inverse() } else { g })
            .collect();
        prop_assert_eq!(component_count(&flipped), component_count(&word));
    }

    #[test]
    fn embedding_stays_strictly_inside_the_viewport(word in word_strategy()) {
        let (x, y) = embed(&word);
        prop_assert!(x.abs() < 2.0);
        prop_assert!(y.abs() < 2.0);
    }

    #[test]
    fn embedding_is_deterministic(word in word_strategy()) {
        prop_assert_eq!(embed(&word), embed(&word));
    }

    #[test]
    fn appending_a_symbol_moves_the_point_by_its_step(word in word_strategy(), g in generator_strategy()) {
        let (x0, y0) = embed(&word);
        let mut longer = word.clone();
        longer.push(g);
        let (x1, y1) = embed(&longer);

        let step = g.sign() * 0.5f64.powi(word.len() as i32);
        match g.base() {
            braidplane_words::Base::A => {
                prop_assert_eq!(x1, x0 + step);
                prop_assert_eq!(y1, y0);
            }
            braidplane_words::Base::B => {
                prop_assert_eq!(x1, x0);
                prop_assert_eq!(y1, y0 + step);
            }
        }
    }
}
