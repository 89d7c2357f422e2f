use crate::bracket::Bracket;

/// The inverse golden ratio: γ = (√5 − 1) / 2 = 1/φ.
pub(super) const INV_PHI: f64 = 0.618_033_988_749_894_9;

/// Outer bounds plus the two golden-ratio sample positions λ and μ.
///
/// λ sits at fraction `1 − γ` of the width and μ at `γ`, so after either
/// shrink the surviving interior point is already in place.
#[derive(Debug, Clone, Copy)]
pub(super) struct GoldenBracket {
    pub(super) left: f64,
    pub(super) right: f64,

    /// λ
    pub(super) inner_left: f64,

    /// μ
    pub(super) inner_right: f64,
}

impl GoldenBracket {
    pub(super) fn new(bracket: Bracket) -> Self {
        let mut golden = Self {
            left: bracket.left,
            right: bracket.right,
            inner_left: bracket.left,
            inner_right: bracket.right,
        };
        golden.inner_left = golden.at(1.0 - INV_PHI);
        golden.inner_right = golden.at(INV_PHI);
        golden
    }

    pub(super) fn width(&self) -> f64 {
        self.right - self.left
    }

    /// The outer bounds as a plain bracket.
    pub(super) fn outer(&self) -> Bracket {
        Bracket {
            left: self.left,
            right: self.right,
        }
    }

    /// Position `fraction` of the way across the outer bounds.
    fn at(&self, fraction: f64) -> f64 {
        self.left + fraction * self.width()
    }

    /// Drops `(inner_right, right]`. The old λ is reused as μ.
    pub(super) fn shrink_right(&mut self) {
        let carried = self.inner_left;
        self.right = self.inner_right;
        self.inner_right = carried;
        self.inner_left = self.at(1.0 - INV_PHI);
    }

    /// Drops `[left, inner_left)`. The old μ is reused as λ.
    pub(super) fn shrink_left(&mut self) {
        let carried = self.inner_right;
        self.left = self.inner_left;
        self.inner_left = carried;
        self.inner_right = self.at(INV_PHI);
    }
}
