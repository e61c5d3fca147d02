use std::num::NonZeroUsize;

/// Period of the hero auto-advance timer.
pub const HERO_INTERVAL_MS: u32 = 9_000;

/// Position in a fixed, non-empty ordered list. Every move wraps in both
/// directions, so the index always stays below `len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: NonZeroUsize,
}

impl Carousel {
    pub fn new(len: NonZeroUsize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len.get()
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }

    #[must_use]
    pub fn advance(self) -> Self {
        self.step(1)
    }

    #[must_use]
    pub fn retreat(self) -> Self {
        self.step(-1)
    }

    /// Moves straight to `index`; out-of-range values wrap like any other move.
    #[must_use]
    pub fn jump_to(self, index: usize) -> Self {
        Self {
            index: index % self.len(),
            ..self
        }
    }

    fn step(self, delta: isize) -> Self {
        let len = self.len() as isize;
        let index = (self.index as isize + delta).rem_euclid(len) as usize;
        Self { index, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn carousel(len: usize) -> Carousel {
        Carousel::new(NonZeroUsize::new(len).expect("non-empty"))
    }

    #[test]
    fn starts_at_first_slide() {
        let c = carousel(3);
        assert_eq!(c.index(), 0);
        assert!(c.is_active(0));
    }

    #[test]
    fn advance_wraps_after_last_slide() {
        let a = carousel(3);
        let b = a.advance();
        assert_eq!(b.index(), 1);
        let c = b.advance();
        assert_eq!(c.index(), 2);
        assert_eq!(c.advance().index(), 0);
    }

    #[test]
    fn retreat_wraps_before_first_slide() {
        assert_eq!(carousel(3).retreat().index(), 2);
    }

    #[test]
    fn single_slide_never_moves() {
        let c = carousel(1);
        assert_eq!(c.advance().index(), 0);
        assert_eq!(c.retreat().index(), 0);
        assert_eq!(c.jump_to(5).index(), 0);
    }

    #[test]
    fn jump_to_selects_index_and_wraps_out_of_range() {
        assert_eq!(carousel(3).jump_to(2).index(), 2);
        assert_eq!(carousel(3).jump_to(4).index(), 1);
    }

    proptest! {
        #[test]
        fn index_stays_in_range(len in 1usize..16, moves in prop::collection::vec(any::<bool>(), 0..64)) {
            let mut c = carousel(len);
            for forward in moves {
                c = if forward { c.advance() } else { c.retreat() };
                prop_assert!(c.index() < len);
            }
        }

        #[test]
        fn retreat_undoes_advance(len in 1usize..16, start in 0usize..16) {
            let c = carousel(len).jump_to(start);
            prop_assert_eq!(c.advance().retreat(), c);
            prop_assert_eq!(c.retreat().advance(), c);
        }
    }
}
