/// Partial-order relation between two feature vectors under componentwise
/// ordering.
///
/// `Dominates` means self is ≥ the other vector in every component with at
/// least one strict >; `Dominated` is the mirror image. Vectors with both a
/// strictly smaller and a strictly greater component are `Incomparable`, a
/// distinct variant rather than an overloaded integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    Equal,
    Dominates,
    Dominated,
    Incomparable,
}

impl Dominance {
    /// Classifies the relation of `x` to `y`.
    ///
    /// Scans componentwise, counting strict < and strict > occurrences, and
    /// short-circuits to `Incomparable` as soon as one of each has been seen.
    /// Both slices must have the same length.
    pub fn between(x: &[f64], y: &[f64]) -> Dominance {
        debug_assert_eq!(x.len(), y.len());
        let mut less = 0usize;
        let mut greater = 0usize;
        for (a, b) in x.iter().zip(y.iter()) {
            if a < b {
                less += 1;
            } else if a > b {
                greater += 1;
            }
            if less > 0 && greater > 0 {
                return Dominance::Incomparable;
            }
        }
        match (less > 0, greater > 0) {
            (false, false) => Dominance::Equal,
            (true, false) => Dominance::Dominated,
            (false, true) => Dominance::Dominates,
            (true, true) => Dominance::Incomparable,
        }
    }

    /// The relation seen from the other vector's side.
    pub fn flipped(self) -> Dominance {
        match self {
            Dominance::Dominates => Dominance::Dominated,
            Dominance::Dominated => Dominance::Dominates,
            other => other,
        }
    }
}
