/// Asserts that an agent with the given ID is no longer in the water.
#[macro_export]
macro_rules! assert_agent_gone {
    ($eco:expr, $id:expr) => {
        assert!(
            $eco.agent($id).is_none(),
            "Agent {} should be gone but was found",
            $id
        );
    };
}

/// Asserts that the population count matches the expected value.
#[macro_export]
macro_rules! assert_population {
    ($eco:expr, $count:expr) => {
        assert_eq!($eco.agents().len(), $count, "Population count mismatch");
    };
}

/// Asserts two floats agree to within 1e-9.
#[macro_export]
macro_rules! assert_close {
    ($left:expr, $right:expr) => {
        let (l, r): (f64, f64) = ($left, $right);
        assert!((l - r).abs() < 1e-9, "{} is not close to {}", l, r);
    };
}
