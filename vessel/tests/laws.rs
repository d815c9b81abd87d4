//! Property-based tests for the combinators and conversions.

use proptest::prelude::*;
use vessel::prelude::*;

/// Strategy for generating optionals
fn optional_strategy() -> impl Strategy<Value = Optional<i32>> {
    prop::option::of(any::<i32>()).prop_map(Optional::from)
}

/// Strategy for generating outcomes, undecided ones included
fn outcome_strategy() -> impl Strategy<Value = Outcome<i8, i32>> {
    prop_oneof![
        any::<i32>().prop_map(Outcome::<i8, i32>::success),
        any::<i8>().prop_map(Outcome::<i8, i32>::failure),
        Just(Outcome::<i8, i32>::new()),
    ]
}

proptest! {
    #[test]
    fn optional_or_else_prefers_present(a in optional_strategy(), b in optional_strategy()) {
        let combined = a.or_else(b);
        if a.is_present() {
            prop_assert_eq!(combined, a);
        } else {
            prop_assert_eq!(combined, b);
        }
        // Idempotent on identical inputs.
        prop_assert_eq!(a.or_else(b), combined);
    }

    #[test]
    fn outcome_or_else_prefers_success(a in outcome_strategy(), b in outcome_strategy()) {
        let combined = a.or_else(b);
        if a.is_success() {
            prop_assert_eq!(combined, a);
        } else {
            prop_assert_eq!(combined, b);
        }
        prop_assert_eq!(a.or_else(b), combined);
    }

    #[test]
    fn to_result_then_to_option_is_identity(a in optional_strategy(), error in any::<i8>()) {
        let outcome = a.to_result(error);
        prop_assert_eq!(outcome.to_option(), a);
        prop_assert_eq!(a.to_result(error), outcome);
    }

    #[test]
    fn to_option_discards_every_failure(a in outcome_strategy()) {
        let option = a.to_option();
        prop_assert_eq!(option.is_present(), a.is_success());
        prop_assert_eq!(option.value(), a.value());
    }

    #[test]
    fn counts_are_zero_or_one(a in optional_strategy(), b in outcome_strategy()) {
        prop_assert_eq!(a.count(), usize::from(a.is_present()));
        prop_assert_eq!(b.count(), 1);
        prop_assert_eq!(a.into_iter().count(), a.count());
    }

    #[test]
    fn collecting_outcomes_keeps_the_first_failure(outcomes in prop::collection::vec(outcome_strategy(), 0..16)) {
        let collected: Outcome<i8, i32> = outcomes.iter().copied().collect();

        let first_error = outcomes.iter().find_map(|outcome| match outcome {
            Outcome::Failure(Fault::Error(error)) => Some(*error),
            _ => None,
        });
        let last_success_before = outcomes
            .iter()
            .take_while(|outcome| !matches!(outcome, Outcome::Failure(Fault::Error(_))))
            .filter_map(|outcome| outcome.value().copied())
            .last();

        match (first_error, last_success_before) {
            (Some(error), _) => prop_assert_eq!(collected, Outcome::failure(error)),
            (None, Some(value)) => prop_assert_eq!(collected, Outcome::success(value)),
            (None, None) => prop_assert_eq!(collected, Outcome::new()),
        }
    }

    #[test]
    fn collecting_optionals_keeps_the_last_value(values in prop::collection::vec(any::<i32>(), 0..16)) {
        let collected: Optional<i32> = values.iter().copied().collect();
        prop_assert_eq!(collected.into_option(), values.last().copied());
    }
}
