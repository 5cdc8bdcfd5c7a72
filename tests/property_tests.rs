// Property tests over random arrays for every algorithm

use proptest::prelude::*;
use sortty::engine::algorithm::Algorithm;
use sortty::engine::controller::RunController;

fn algorithm() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_every_algorithm_sorts(
        algorithm in algorithm(),
        input in prop::collection::vec(-1_000i64..1_000, 2..48),
    ) {
        let mut controller = RunController::new();
        controller.start(algorithm, &input).unwrap();
        controller.run_to_end().unwrap();

        let mut expected = input.clone();
        expected.sort();
        prop_assert_eq!(controller.array(), expected.as_slice());
        prop_assert_eq!(controller.sorted().len(), input.len());
    }

    #[test]
    fn prop_extreme_values_sort(
        algorithm in algorithm(),
        input in prop::collection::vec(any::<i64>(), 2..16),
    ) {
        let mut controller = RunController::new();
        controller.start(algorithm, &input).unwrap();
        controller.run_to_end().unwrap();

        let mut expected = input.clone();
        expected.sort();
        prop_assert_eq!(controller.array(), expected.as_slice());
    }

    #[test]
    fn prop_sorted_set_never_shrinks(
        algorithm in algorithm(),
        input in prop::collection::vec(0i64..20, 2..24),
    ) {
        let mut controller = RunController::new();
        controller.start(algorithm, &input).unwrap();
        controller.run_to_end().unwrap();

        let frames: Vec<_> = controller.frames().iter().collect();
        for pair in frames.windows(2) {
            prop_assert!(pair[0].sorted.is_subset(&pair[1].sorted));
            prop_assert_eq!(pair[0].array.len(), pair[1].array.len());
        }
    }

    #[test]
    fn prop_scrub_returns_recorded_frame(
        algorithm in algorithm(),
        input in prop::collection::vec(-50i64..50, 2..20),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut controller = RunController::new();
        controller.start(algorithm, &input).unwrap();
        controller.run_to_end().unwrap();

        let index = pick.index(controller.frame_count());
        let recorded = controller.frames().get(index).unwrap().clone();
        let scrubbed = controller.scrub(index).unwrap().clone();
        prop_assert_eq!(&scrubbed, &recorded);
        prop_assert_eq!(controller.position(), index);
        prop_assert_eq!(controller.array(), recorded.array.as_slice());
    }
}
