use integration_tests::{any_params, constant_argument, interval, smooth_on_unit_decade};
use logeq_core::{Curve, Interval};
use logeq_solvers::solve;
use proptest::prelude::*;

proptest! {
    #[test]
    fn constant_argument_roots_have_small_residual(
        params in constant_argument(),
        interval in interval(),
    ) {
        let roots = solve(&params, interval).unwrap();
        let difference = params.difference();

        for root in roots.iter().copied() {
            let value = difference.eval(root).unwrap();
            prop_assert!(value.abs() < 1e-6, "F({}) = {}", root, value);
        }
    }

    #[test]
    fn smooth_roots_have_small_residual(params in smooth_on_unit_decade()) {
        let roots = solve(&params, Interval::new(0.0, 10.0)).unwrap();
        let difference = params.difference();

        for root in roots.iter().copied() {
            let value = difference.eval(root).unwrap();
            prop_assert!(value.abs() < 1e-6, "F({}) = {}", root, value);
        }
    }

    #[test]
    fn solving_is_deterministic(params in any_params(), interval in interval()) {
        let first = solve(&params, interval).unwrap();
        let second = solve(&params, interval).unwrap();

        let bits = |roots: &[f64]| roots.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        prop_assert_eq!(bits(&first), bits(&second));
    }

    #[test]
    fn roots_are_ascending_and_separated(params in any_params(), interval in interval()) {
        let roots = solve(&params, interval).unwrap();

        for pair in roots.windows(2) {
            prop_assert!(pair[1] > pair[0]);
            prop_assert!(pair[1] - pair[0] > 1e-4);
        }
    }

    #[test]
    fn roots_lie_in_interval(params in any_params(), interval in interval()) {
        let roots = solve(&params, interval).unwrap();
        for root in roots.iter().copied() {
            prop_assert!(root >= interval.min && root <= interval.max + 1e-9);
        }
    }
}
