//! One side's deck: draw pile, hand and discard.
//!
//! A `Deck` owns every card of one side for the whole match. Cards only ever
//! move forward through the piles:
//!
//! ```text
//! add_card ──► DrawPile ──draw_cards──► Hand ──play_card──► Discard
//! ```
//!
//! Shortages are not errors. `draw_cards` reports how many draws found the
//! pile empty and `select_random_card` returns a `DeckSignal` for an empty
//! hand; the controller decides what to do with them. Playing a card that is
//! not in hand is a caller bug and returns `MatchError::CardNotInHand`.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::cards::{Card, CardInstance};
use crate::core::{CardKey, GameRng, Side};
use crate::error::{DeckSignal, MatchError, MatchResult};
use crate::zones::{Pile, PileManager};

/// Outcome of a `draw_cards` request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawReport {
    /// Side that drew.
    pub side: Side,
    /// Cards moved into hand, in draw order.
    pub drawn: SmallVec<[CardInstance; 4]>,
    /// Requested draws that found the draw pile empty.
    pub missing: usize,
}

impl DrawReport {
    /// True when every requested card was drawn.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing == 0
    }

    /// One `DeckExhausted` signal per missing draw.
    pub fn signals(&self) -> impl Iterator<Item = DeckSignal> + '_ {
        std::iter::repeat(DeckSignal::DeckExhausted(self.side)).take(self.missing)
    }
}

/// A side's cards and their piles.
///
/// ## Example
///
/// ```
/// use elemental_clash::cards::{Card, Element};
/// use elemental_clash::core::{GameRng, Side, starter_cards};
/// use elemental_clash::deck::Deck;
///
/// let mut deck = Deck::new(Side::Player, GameRng::new(7));
/// deck.initialize(&starter_cards());
///
/// let report = deck.draw_cards(3);
/// assert_eq!(report.drawn.len(), 3);
/// assert_eq!(deck.hand().len(), 3);
/// assert_eq!(deck.draw_pile().len(), 3);
///
/// let played = deck.play_card(report.drawn[0].key).unwrap();
/// assert_eq!(deck.hand().len(), 2);
/// assert_eq!(deck.discarded(), vec![played]);
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    owner: Side,
    rng: GameRng,
    cards: FxHashMap<CardKey, Card>,
    piles: PileManager,
    next_serial: u32,
}

impl Deck {
    /// Create an empty deck for `owner` drawing randomness from `rng`.
    #[must_use]
    pub fn new(owner: Side, rng: GameRng) -> Self {
        Self {
            owner,
            rng,
            cards: FxHashMap::default(),
            piles: PileManager::new(),
            next_serial: 0,
        }
    }

    /// The side this deck belongs to.
    #[must_use]
    pub fn owner(&self) -> Side {
        self.owner
    }

    /// Add the starter cards to the draw pile, then shuffle.
    ///
    /// Not idempotent: a second call adds another copy of every card.
    pub fn initialize(&mut self, starter: &[Card]) {
        for &card in starter {
            self.add_card(card);
        }
        self.shuffle();
    }

    /// Append a card to the back of the draw pile.
    pub fn add_card(&mut self, card: Card) -> CardKey {
        let key = CardKey::new(self.owner, self.next_serial);
        self.next_serial += 1;

        self.cards.insert(key, card);
        self.piles.add(key, Pile::DrawPile);
        key
    }

    /// Uniformly permute the draw pile.
    pub fn shuffle(&mut self) {
        self.piles.shuffle(Pile::DrawPile, &mut self.rng);
    }

    /// Move up to `count` cards from the front of the draw pile into hand.
    pub fn draw_cards(&mut self, count: usize) -> DrawReport {
        let mut drawn = SmallVec::new();

        for _ in 0..count {
            match self.piles.move_front(Pile::DrawPile, Pile::Hand) {
                Some(key) => drawn.push(self.instance(key)),
                None => break,
            }
        }

        DrawReport {
            side: self.owner,
            missing: count - drawn.len(),
            drawn,
        }
    }

    /// A uniformly random card from hand, left in hand.
    pub fn select_random_card(&mut self) -> Result<CardInstance, DeckSignal> {
        let hand = self.piles.cards(Pile::Hand);
        let index = self
            .rng
            .choose_index(hand.len())
            .ok_or(DeckSignal::EmptyHand(self.owner))?;
        Ok(self.instance(hand[index]))
    }

    /// Remove a card from hand into the discard.
    pub fn play_card(&mut self, key: CardKey) -> MatchResult<CardInstance> {
        if !self.piles.is_in(key, Pile::Hand) {
            return Err(MatchError::CardNotInHand(key));
        }
        self.piles.move_to(key, Pile::Discard);
        Ok(self.instance(key))
    }

    /// Pick a uniformly random card from hand and discard it.
    ///
    /// The pick always comes from the hand, so the move cannot miss.
    pub fn play_random_card(&mut self) -> Result<CardInstance, DeckSignal> {
        let card = self.select_random_card()?;
        self.piles.move_to(card.key, Pile::Discard);
        Ok(card)
    }

    /// Look up any card this deck owns.
    #[must_use]
    pub fn card(&self, key: CardKey) -> Option<CardInstance> {
        self.cards.get(&key).map(|&card| CardInstance::new(key, card))
    }

    /// Which pile a card is in.
    #[must_use]
    pub fn location(&self, key: CardKey) -> Option<Pile> {
        self.piles.location(key)
    }

    /// Cards in a pile, front first.
    #[must_use]
    pub fn pile(&self, pile: Pile) -> Vec<CardInstance> {
        self.piles
            .cards(pile)
            .iter()
            .map(|&key| self.instance(key))
            .collect()
    }

    #[must_use]
    pub fn draw_pile(&self) -> Vec<CardInstance> {
        self.pile(Pile::DrawPile)
    }

    #[must_use]
    pub fn hand(&self) -> Vec<CardInstance> {
        self.pile(Pile::Hand)
    }

    #[must_use]
    pub fn discarded(&self) -> Vec<CardInstance> {
        self.pile(Pile::Discard)
    }

    /// Number of cards in a pile.
    #[must_use]
    pub fn pile_size(&self, pile: Pile) -> usize {
        self.piles.size(pile)
    }

    /// Total cards ever added.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.piles.total_cards()
    }

    /// No card left to draw or play.
    #[must_use]
    pub fn is_spent(&self) -> bool {
        self.piles.size(Pile::DrawPile) == 0 && self.piles.size(Pile::Hand) == 0
    }

    fn instance(&self, key: CardKey) -> CardInstance {
        // Every key in the pile manager was inserted into `cards` first
        CardInstance::new(key, self.cards[&key])
    }
}
