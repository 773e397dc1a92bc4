//! Hero carousel state.

use crate::content::{HeroSlide, HERO_SLIDES};

/// Current position of the hero carousel.
///
/// The autoplay timer advances the slide while `paused` is false; any
/// manual navigation pauses autoplay so the carousel stops fighting the
/// user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroState {
    pub index: usize,
    pub paused: bool,
}

impl Default for HeroState {
    fn default() -> Self {
        Self::new()
    }
}

impl HeroState {
    /// Creates the carousel state on the first slide, autoplaying.
    pub fn new() -> Self {
        Self {
            index: 0,
            paused: false,
        }
    }

    /// Returns the slide currently shown.
    pub fn slide(&self) -> &'static HeroSlide {
        &HERO_SLIDES[self.index]
    }

    /// Advances to the next slide, wrapping around.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % HERO_SLIDES.len();
    }

    /// Moves to the previous slide, wrapping around, and pauses autoplay.
    pub fn previous(&mut self) {
        self.index = (self.index + HERO_SLIDES.len() - 1) % HERO_SLIDES.len();
        self.paused = true;
    }

    /// Moves to the next slide via user interaction and pauses autoplay.
    pub fn next(&mut self) {
        self.advance();
        self.paused = true;
    }

    /// Jumps to a slide from an indicator dot; out-of-range is ignored.
    pub fn jump(&mut self, index: usize) {
        if index < HERO_SLIDES.len() {
            self.index = index;
            self.paused = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_around() {
        let mut hero = HeroState::new();
        for _ in 0..HERO_SLIDES.len() {
            hero.advance();
        }
        assert_eq!(hero.index, 0);
        assert!(!hero.paused, "autoplay advance must not pause");
    }

    #[test]
    fn previous_wraps_backwards_and_pauses() {
        let mut hero = HeroState::new();
        hero.previous();
        assert_eq!(hero.index, HERO_SLIDES.len() - 1);
        assert!(hero.paused);
    }

    #[test]
    fn jump_ignores_out_of_range() {
        let mut hero = HeroState::new();
        hero.jump(HERO_SLIDES.len());
        assert_eq!(hero.index, 0);
        assert!(!hero.paused);

        hero.jump(1);
        assert_eq!(hero.index, 1);
        assert!(hero.paused);
    }
}
