// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Remembers the last value of a boolean input and reports when it goes from `false` to
/// `true`. Holding the input at `true` reports nothing after the first observation, and
/// going from `true` to `false` re-arms the detector.
///
/// The detector starts out at `false`, so an input that is already `true` the very first
/// time it is observed counts as a rising edge.
///
/// ```text
/// observed: false  true  true  true  false  true
/// rising:   no     YES   no    no    no     YES
/// ```
///
/// # Example
///
/// ```
/// use r3bl_design_system::EdgeDetector;
///
/// let mut it = EdgeDetector::default();
/// assert!(it.observe(true));
/// assert!(!it.observe(true));
/// assert!(!it.observe(false));
/// assert!(it.observe(true));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeDetector {
    last_seen: bool,
}

impl EdgeDetector {
    /// Record `current` and return `true` only if this is a `false` → `true` transition.
    pub fn observe(&mut self, current: bool) -> bool {
        let rising = !self.last_seen && current;
        self.last_seen = current;
        rising
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(&[false, false, false], &[false, false, false] ; "never rises")]
    #[test_case(&[true], &[true] ; "true on first observation is an edge")]
    #[test_case(&[true, true, true], &[true, false, false] ; "level held only fires once")]
    #[test_case(&[false, true, false, true], &[false, true, false, true] ; "re-armed by false")]
    #[test_case(&[true, false, false], &[true, false, false] ; "falling edge is ignored")]
    fn test_observe_sequence(inputs: &[bool], expected: &[bool]) {
        let mut it = EdgeDetector::default();
        let actual: Vec<bool> = inputs.iter().map(|&input| it.observe(input)).collect();
        assert_eq2!(actual, expected.to_vec());
    }

    #[test]
    fn test_copies_track_edges_independently() {
        let mut it = EdgeDetector::default();
        assert!(it.observe(true));
        let mut copy = it;
        assert!(!copy.observe(false));
        assert!(copy.observe(true));
        // The original never saw the `false`, so it is still held high.
        assert!(!it.observe(true));
    }
}
