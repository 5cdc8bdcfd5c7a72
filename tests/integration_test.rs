// Integration tests for the sorting engine

use sortty::engine::algorithm::Algorithm;
use sortty::engine::controller::{RunController, RunStatus};
use sortty::engine::errors::{EngineError, ValidationError};
use sortty::engine::outcome::StepOutcome;
use sortty::engine::sorted::SortedSet;
use sortty::steppers::{AlgorithmState, SortKey};
use std::cmp::Ordering;
use std::fmt;

const SAMPLE: [i64; 12] = [58, 12, 91, 7, 34, 12, 76, -25, 63, 89, 3, 7];

fn started(algorithm: Algorithm, input: &[i64]) -> RunController {
    let mut controller = RunController::new();
    controller.start(algorithm, input).expect("start failed");
    controller
}

/// Tick to completion, collecting every outcome
fn tick_all(controller: &mut RunController) -> Vec<StepOutcome> {
    let mut outcomes = Vec::new();
    while controller.status() == RunStatus::Running {
        outcomes.push(controller.tick().expect("tick failed"));
        assert!(outcomes.len() < 100_000, "run did not terminate");
    }
    outcomes
}

#[test]
fn test_bubble_scenario() {
    let mut controller = started(Algorithm::Bubble, &[5, 3, 4, 1, 2]);

    let first = controller.tick().unwrap();
    assert_eq!((first.primary, first.secondary), (Some(0), Some(1)));
    assert!(first.message.contains("(5 vs 3)"));
    assert_eq!(controller.array(), &[3, 5, 4, 1, 2]);

    controller.run_to_end().unwrap();
    assert_eq!(controller.array(), &[1, 2, 3, 4, 5]);
}

#[test]
fn test_insertion_scenario() {
    let mut controller = started(Algorithm::Insertion, &[2, 2, 1]);
    controller.run_to_end().unwrap();
    assert_eq!(controller.array(), &[1, 2, 2]);
}

#[test]
fn test_single_element_rejected() {
    let mut controller = RunController::new();
    assert_eq!(
        controller.start(Algorithm::Bubble, &[1]),
        Err(ValidationError::TooShort { len: 1 })
    );
    assert_eq!(controller.frame_count(), 0);
    assert_eq!(controller.tick(), Err(EngineError::NotStarted));
}

#[test]
fn test_radix_scenario() {
    let mut controller = started(Algorithm::Radix, &[170, 45, 75, 90, 802, 24, 2, 66]);
    controller.run_to_end().unwrap();
    assert_eq!(controller.array(), &[2, 24, 45, 66, 75, 90, 170, 802]);

    // Each digit pass takes 8 counts, 9 accumulations, 8 placements, 8 copies
    let ones = &controller.frames().get(33).unwrap().array;
    assert_eq!(ones, &vec![170, 90, 802, 2, 24, 45, 75, 66]);
    let tens = &controller.frames().get(66).unwrap().array;
    assert_eq!(tens, &vec![802, 2, 24, 45, 66, 170, 75, 90]);
}

#[test]
fn test_every_algorithm_sorts_sample() {
    let mut expected = SAMPLE.to_vec();
    expected.sort();

    for algorithm in Algorithm::ALL {
        let mut controller = started(algorithm, &SAMPLE);
        let outcomes = tick_all(&mut controller);
        assert_eq!(controller.array(), expected.as_slice(), "{algorithm}");
        assert_eq!(controller.sorted().len(), SAMPLE.len(), "{algorithm}");
        assert!(outcomes.last().is_some_and(|o| o.finished), "{algorithm}");
        assert_eq!(
            outcomes.iter().filter(|o| o.finished).count(),
            1,
            "{algorithm} reported completion more than once"
        );
        assert_eq!(controller.frame_count(), outcomes.len() + 1);
    }
}

#[test]
fn test_highlights_stay_in_bounds() {
    for algorithm in Algorithm::ALL {
        let mut controller = started(algorithm, &SAMPLE);
        for outcome in tick_all(&mut controller) {
            assert!(
                outcome.highlighted().all(|i| i < SAMPLE.len()),
                "{algorithm}: {outcome:?}"
            );
        }
    }
}

#[test]
fn test_sorted_set_is_monotonic() {
    for algorithm in Algorithm::ALL {
        let mut controller = started(algorithm, &SAMPLE);
        controller.run_to_end().unwrap();

        let frames: Vec<_> = controller.frames().iter().collect();
        for pair in frames.windows(2) {
            assert!(
                pair[0].sorted.is_subset(&pair[1].sorted),
                "{algorithm}: step {} lost a sorted index",
                pair[1].step
            );
        }
    }
}

#[test]
fn test_certified_positions_hold_final_values() {
    let mut expected = SAMPLE.to_vec();
    expected.sort();

    for algorithm in Algorithm::ALL {
        let mut controller = started(algorithm, &SAMPLE);
        controller.run_to_end().unwrap();
        for frame in controller.frames().iter() {
            for index in frame.sorted.to_sorted_vec() {
                assert_eq!(
                    frame.array[index], expected[index],
                    "{algorithm}: step {} certified index {index} too early",
                    frame.step
                );
            }
        }
    }
}

#[test]
fn test_each_tick_touches_at_most_two_positions() {
    let inputs: Vec<Vec<i64>> = vec![
        (0..70).rev().collect(),
        vec![i64::MIN, 5, i64::MAX, -3, 0, 0, -3],
        vec![170, 45, 75, 90, 802, 24, 2, 66],
        vec![100, 10, 1, 1000, 0],
        vec![2, 1],
        SAMPLE.to_vec(),
    ];

    for algorithm in Algorithm::ALL {
        for input in &inputs {
            let mut controller = started(algorithm, input);
            controller.run_to_end().unwrap();

            let frames: Vec<_> = controller.frames().iter().collect();
            for pair in frames.windows(2) {
                let changed = pair[0]
                    .array
                    .iter()
                    .zip(&pair[1].array)
                    .filter(|(before, after)| before != after)
                    .count();
                assert!(
                    changed <= 2,
                    "{algorithm}: step {} rewrote {changed} positions on {input:?}",
                    pair[1].step
                );
            }

            let mut expected = input.clone();
            expected.sort();
            assert_eq!(controller.array(), expected.as_slice(), "{algorithm}");
        }
    }
}

#[test]
fn test_scrub_is_idempotent() {
    let mut controller = started(Algorithm::Quick, &SAMPLE);
    for _ in 0..15 {
        controller.tick().unwrap();
    }

    let first = controller.scrub(7).unwrap().clone();
    let second = controller.scrub(7).unwrap().clone();
    assert_eq!(first, second);
    assert_eq!(controller.array(), first.array.as_slice());
}

#[test]
fn test_scrub_does_not_change_forward_execution() {
    for algorithm in Algorithm::ALL {
        let mut reference = started(algorithm, &SAMPLE);
        let expected = tick_all(&mut reference);

        let mut controller = started(algorithm, &SAMPLE);
        let split = expected.len() / 2;
        let mut outcomes: Vec<StepOutcome> =
            (0..split).map(|_| controller.tick().unwrap()).collect();

        controller.scrub(0).unwrap();
        controller.scrub(split / 2).unwrap();
        outcomes.extend(tick_all(&mut controller));

        assert_eq!(outcomes, expected, "{algorithm}");
        assert_eq!(controller.array(), reference.array(), "{algorithm}");
    }
}

#[test]
fn test_finished_tick_is_a_no_op() {
    let mut controller = started(Algorithm::Gnome, &[2, 1]);
    controller.run_to_end().unwrap();
    let frames = controller.frame_count();

    let again = controller.tick().unwrap();
    assert!(again.finished);
    assert_eq!(controller.frame_count(), frames);
}

#[test]
fn test_restart_discards_previous_run() {
    let mut controller = started(Algorithm::Heap, &SAMPLE);
    controller.run_to_end().unwrap();

    controller.start(Algorithm::Shell, &[3, 1, 2]).unwrap();
    assert_eq!(controller.algorithm(), Some(Algorithm::Shell));
    assert_eq!(controller.frame_count(), 1);
    assert!(controller.sorted().is_empty());
    assert_eq!(controller.array(), &[3, 1, 2]);
}

#[test]
fn test_failed_start_leaves_controller_idle() {
    let mut controller = started(Algorithm::Merge, &SAMPLE);
    controller.tick().unwrap();

    assert_eq!(
        controller.start(Algorithm::Merge, &[]),
        Err(ValidationError::Empty)
    );
    assert_eq!(controller.status(), RunStatus::Idle);
    assert_eq!(controller.frame_count(), 0);
}

/// Element whose ordering ignores `tag`, so stability is observable
#[derive(Debug, Clone, Copy)]
struct Tagged {
    key: i64,
    tag: usize,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl fmt::Display for Tagged {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}

impl SortKey for Tagged {
    fn radix_key(&self) -> i64 {
        self.key
    }
}

fn sort_tagged(algorithm: Algorithm, keys: &[i64]) -> Vec<Tagged> {
    let mut array: Vec<Tagged> = keys
        .iter()
        .enumerate()
        .map(|(tag, &key)| Tagged { key, tag })
        .collect();
    let mut sorted = SortedSet::new();
    let mut state = AlgorithmState::new(algorithm, &array);
    for _ in 0..100_000 {
        if state.step(&mut array, &mut sorted).finished {
            return array;
        }
    }
    panic!("{algorithm} did not finish");
}

#[test]
fn test_stable_algorithms_keep_equal_keys_in_order() {
    // Long enough for Tim to merge several runs
    let keys: Vec<i64> = (0..100).map(|i| (i * 37 % 11) - 5).collect();

    for algorithm in Algorithm::ALL.into_iter().filter(|a| a.is_stable()) {
        let result = sort_tagged(algorithm, &keys);
        assert!(
            result.windows(2).all(|w| w[0].key < w[1].key
                || (w[0].key == w[1].key && w[0].tag < w[1].tag)),
            "{algorithm} is not stable"
        );
    }
}

#[test]
fn test_insertion_keeps_duplicate_order() {
    let result = sort_tagged(Algorithm::Insertion, &[2, 2, 1]);
    let tags: Vec<usize> = result.iter().map(|t| t.tag).collect();
    assert_eq!(tags, vec![2, 0, 1]);
}
