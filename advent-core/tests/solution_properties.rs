//! Property-based tests for answer serialization

use advent_core::Solution;
use proptest::prelude::*;

proptest! {
    /// Integer answers survive a trip through the cache's JSON encoding.
    #[test]
    fn int_roundtrips_through_json(n in any::<i64>()) {
        let json = serde_json::to_string(&Solution::Int(n)).unwrap();
        let back: Solution = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, Solution::Int(n));
    }

    /// String answers survive the same trip and never turn into integers,
    /// even when they look numeric.
    #[test]
    fn text_roundtrips_through_json(s in "\\PC*") {
        let json = serde_json::to_string(&Solution::Text(s.clone())).unwrap();
        let back: Solution = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, Solution::Text(s));
    }

    /// Display of an integer answer matches the plain integer rendering.
    #[test]
    fn display_matches_integer(n in any::<i64>()) {
        prop_assert_eq!(Solution::Int(n).to_string(), n.to_string());
    }
}
