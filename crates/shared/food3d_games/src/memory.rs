use crate::{lcg_next, GameReward};

// ─────────────────────────────────────────────────────────────────────────
// Memory match: 8 food pairs face down, flip two at a time.
// ─────────────────────────────────────────────────────────────────────────

pub const FOODS: [&str; 8] = ["🍕", "🍔", "🍟", "🌭", "🌮", "🍦", "🍩", "🥤"];

pub const WIN_POINTS: u32 = 20;
pub const WIN_MESSAGE: &str = "🎉 Congratulations! You won! +20 points earned!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace {
    Down,
    Up,
    Matched,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryCard {
    pub food: &'static str,
    pub face: CardFace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Card was already up, matched, or a mismatch is still showing.
    Ignored,
    /// First card of a pair is now face up.
    FirstUp,
    Matched { won: bool },
    /// Both cards stay up until [`MemoryGame::hide_mismatch`] is called.
    Mismatch { first: usize, second: usize },
}

#[derive(Debug, Clone)]
pub struct MemoryGame {
    cards: Vec<MemoryCard>,
    flipped: Vec<usize>,
    pending_mismatch: Option<(usize, usize)>,
    matched_pairs: u32,
    moves: u32,
}

impl MemoryGame {
    pub fn new(seed: u64) -> Self {
        let mut foods: Vec<&'static str> = FOODS.iter().chain(FOODS.iter()).copied().collect();
        shuffle(&mut foods, seed);
        let cards = foods
            .into_iter()
            .map(|food| MemoryCard {
                food,
                face: CardFace::Down,
            })
            .collect();
        Self {
            cards,
            flipped: Vec::with_capacity(2),
            pending_mismatch: None,
            matched_pairs: 0,
            moves: 0,
        }
    }

    pub fn cards(&self) -> &[MemoryCard] {
        &self.cards
    }

    pub fn matched_pairs(&self) -> u32 {
        self.matched_pairs
    }

    pub fn total_pairs(&self) -> u32 {
        FOODS.len() as u32
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_won(&self) -> bool {
        self.matched_pairs == self.total_pairs()
    }

    pub fn reward(&self) -> Option<GameReward> {
        self.is_won().then_some(GameReward::new(WIN_POINTS))
    }

    pub fn flip(&mut self, index: usize) -> FlipOutcome {
        if self.pending_mismatch.is_some() {
            return FlipOutcome::Ignored;
        }
        let Some(card) = self.cards.get_mut(index) else {
            return FlipOutcome::Ignored;
        };
        if card.face != CardFace::Down {
            return FlipOutcome::Ignored;
        }
        card.face = CardFace::Up;
        self.flipped.push(index);

        if self.flipped.len() < 2 {
            return FlipOutcome::FirstUp;
        }

        self.moves += 1;
        let first = self.flipped[0];
        let second = self.flipped[1];
        self.flipped.clear();

        if self.cards[first].food == self.cards[second].food {
            self.cards[first].face = CardFace::Matched;
            self.cards[second].face = CardFace::Matched;
            self.matched_pairs += 1;
            FlipOutcome::Matched { won: self.is_won() }
        } else {
            self.pending_mismatch = Some((first, second));
            FlipOutcome::Mismatch { first, second }
        }
    }

    /// Turn a shown mismatch back face down.
    pub fn hide_mismatch(&mut self) {
        if let Some((a, b)) = self.pending_mismatch.take() {
            self.cards[a].face = CardFace::Down;
            self.cards[b].face = CardFace::Down;
        }
    }
}

// Fisher-Yates over the LCG stream.
fn shuffle<T>(items: &mut [T], seed: u64) {
    let mut state = seed;
    for i in (1..items.len()).rev() {
        let j = (lcg_next(&mut state) as usize) % (i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partner_of(game: &MemoryGame, index: usize) -> usize {
        let food = game.cards()[index].food;
        game.cards()
            .iter()
            .enumerate()
            .position(|(i, c)| i != index && c.food == food)
            .unwrap()
    }

    #[test]
    fn board_holds_each_food_twice() {
        let game = MemoryGame::new(7);
        assert_eq!(game.cards().len(), 16);
        for food in FOODS {
            assert_eq!(game.cards().iter().filter(|c| c.food == food).count(), 2);
        }
    }

    #[test]
    fn mismatch_blocks_flips_until_hidden() {
        let mut game = MemoryGame::new(42);
        let first = 0;
        let other = (1..16)
            .find(|&i| game.cards()[i].food != game.cards()[first].food)
            .unwrap();

        assert_eq!(game.flip(first), FlipOutcome::FirstUp);
        assert_eq!(
            game.flip(other),
            FlipOutcome::Mismatch {
                first,
                second: other
            }
        );
        assert_eq!(game.moves(), 1);

        let third = (0..16).find(|&i| i != first && i != other).unwrap();
        assert_eq!(game.flip(third), FlipOutcome::Ignored);

        game.hide_mismatch();
        assert_eq!(game.cards()[first].face, CardFace::Down);
        assert_eq!(game.cards()[other].face, CardFace::Down);
        assert_eq!(game.flip(third), FlipOutcome::FirstUp);
    }

    #[test]
    fn flipping_an_up_card_is_ignored() {
        let mut game = MemoryGame::new(3);
        game.flip(5);
        assert_eq!(game.flip(5), FlipOutcome::Ignored);
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn clearing_the_board_wins_twenty_points() {
        let mut game = MemoryGame::new(99);
        let mut last = FlipOutcome::Ignored;
        for i in 0..16 {
            if game.cards()[i].face != CardFace::Down {
                continue;
            }
            let j = partner_of(&game, i);
            game.flip(i);
            last = game.flip(j);
        }
        assert_eq!(last, FlipOutcome::Matched { won: true });
        assert_eq!(game.matched_pairs(), 8);
        assert_eq!(game.moves(), 8);
        assert_eq!(game.reward(), Some(GameReward::new(20)));
    }

    #[test]
    fn different_seeds_shuffle_differently() {
        let a: Vec<_> = MemoryGame::new(1).cards().iter().map(|c| c.food).collect();
        let b: Vec<_> = MemoryGame::new(2).cards().iter().map(|c| c.food).collect();
        assert_ne!(a, b);
    }
}
