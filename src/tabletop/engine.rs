//! The tabletop: all piles, the pending selection, and move resolution.

use tracing::{debug, trace};

use super::selection::{Move, SelectOutcome, Selection};
use crate::core::{
    Card, GameRng, KeyMap, PileSelector, TableConfig, FOUNDATION_COUNT, RANKS_PER_SUIT,
    TABLEAU_COUNT,
};
use crate::piles::{Pile, TableauPile};
use crate::rules::{can_play_on_foundation, can_play_on_tableau};

/// Complete game state for one Klondike session.
///
/// Created once by [`Tabletop::deal`] and mutated only through
/// [`Tabletop::select`]. Renderers read it through the accessors.
///
/// ```
/// use rust_klondike::core::{GameRng, PileSelector};
/// use rust_klondike::tabletop::{SelectOutcome, Tabletop};
///
/// let mut table = Tabletop::deal(&mut GameRng::new(42));
/// assert_eq!(table.stock().len(), 24);
///
/// // Draw one card: stock, then talon.
/// table.select(Some(PileSelector::Stock));
/// let outcome = table.select(Some(PileSelector::Talon));
/// assert!(matches!(outcome, SelectOutcome::Moved(_)));
/// assert_eq!(table.talon().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tabletop {
    pub(super) stock: Pile,
    pub(super) talon: Pile,
    pub(super) foundations: [Pile; FOUNDATION_COUNT],
    pub(super) tableau: [TableauPile; TABLEAU_COUNT],
    pub(super) selection: Selection,
    pub(super) strict_foundation_suits: bool,
}

impl Tabletop {
    /// Shuffle a full deck and deal a new game.
    ///
    /// Tableau pile `i` gets `i + 1` cards peeled off the end of the
    /// shuffled deck, with only its top card face-up. The rest is stock.
    #[must_use]
    pub fn deal(rng: &mut GameRng) -> Self {
        Self::deal_with_config(&TableConfig::default(), rng)
    }

    /// Deal with the rule options from `config`.
    ///
    /// The seed in `config` is not consulted; the caller supplies the RNG
    /// (usually [`TableConfig::rng`]).
    #[must_use]
    pub fn deal_with_config(config: &TableConfig, rng: &mut GameRng) -> Self {
        let mut deck: Vec<Card> = Card::full_deck().collect();
        rng.shuffle(&mut deck);

        let tableau = std::array::from_fn(|i| {
            let run = deck.split_off(deck.len() - (i + 1));
            TableauPile::new(run, i)
        });

        debug!(seed = rng.seed(), stock = deck.len(), "dealt new game");

        Self {
            stock: Pile::from(deck),
            talon: Pile::new(),
            foundations: Default::default(),
            tableau,
            selection: Selection::Idle,
            strict_foundation_suits: config.strict_foundation_suits,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    #[must_use]
    pub fn talon(&self) -> &Pile {
        &self.talon
    }

    /// Foundation `index`. Panics if `index >= 4`.
    #[must_use]
    pub fn foundation(&self, index: usize) -> &Pile {
        &self.foundations[index]
    }

    #[must_use]
    pub fn foundations(&self) -> &[Pile; FOUNDATION_COUNT] {
        &self.foundations
    }

    /// Tableau pile `index`. Panics if `index >= 7`.
    #[must_use]
    pub fn tableau(&self, index: usize) -> &TableauPile {
        &self.tableau[index]
    }

    #[must_use]
    pub fn tableaus(&self) -> &[TableauPile; TABLEAU_COUNT] {
        &self.tableau
    }

    /// Face-down count of tableau pile `index`.
    #[must_use]
    pub fn hidden(&self, index: usize) -> usize {
        self.tableau[index].hidden()
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    #[must_use]
    pub fn strict_foundation_suits(&self) -> bool {
        self.strict_foundation_suits
    }

    /// Every card on the table: stock, talon, foundations, then tableau.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.stock
            .cards()
            .iter()
            .chain(self.talon.cards())
            .chain(self.foundations.iter().flat_map(Pile::cards))
            .chain(self.tableau.iter().flat_map(TableauPile::cards))
            .copied()
    }

    /// The top card of a pile, if the pile exists and is non-empty.
    #[must_use]
    pub fn top(&self, pile: PileSelector) -> Option<Card> {
        match pile {
            PileSelector::Stock => self.stock.top(),
            PileSelector::Talon => self.talon.top(),
            PileSelector::Foundation(i) => self.foundations.get(i as usize)?.top(),
            PileSelector::Tableau(i) => self.tableau.get(i as usize)?.top(),
        }
    }

    /// True once every foundation holds a full suit.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.foundations.iter().all(|f| f.len() == RANKS_PER_SUIT)
    }

    // === Input ===

    /// Resolve a raw key through `keymap` and feed it to [`Tabletop::select`].
    pub fn select_key(&mut self, key: char, keymap: &KeyMap) -> SelectOutcome {
        self.select(keymap.resolve(key))
    }

    /// Feed one keystroke into the selection state machine.
    ///
    /// `None` (or a selector naming a pile that doesn't exist) is an
    /// unrecognized key. While idle, a recognized key becomes the source.
    /// Otherwise the key is the destination: a move is attempted and the
    /// selection returns to idle regardless of the result.
    pub fn select(&mut self, key: Option<PileSelector>) -> SelectOutcome {
        let key = key.filter(|k| k.is_valid());

        match (self.selection, key) {
            (Selection::Idle, None) => {
                trace!("ignored unrecognized key");
                SelectOutcome::Ignored
            }
            (Selection::Idle, Some(source)) => {
                self.selection = Selection::SourceChosen(source);
                trace!(%source, "source selected");
                SelectOutcome::Selected(source)
            }
            (Selection::SourceChosen(from), to) => {
                self.selection = Selection::Idle;
                match to.and_then(|to| self.resolve(from, to)) {
                    Some(mv) => {
                        debug!(from = %mv.from, to = %mv.to, count = mv.count, "move");
                        SelectOutcome::Moved(mv)
                    }
                    None => {
                        trace!(%from, ?to, "move rejected");
                        SelectOutcome::Rejected { from, to }
                    }
                }
            }
        }
    }

    // === Move resolution ===

    fn resolve(&mut self, from: PileSelector, to: PileSelector) -> Option<Move> {
        use PileSelector::{Foundation, Stock, Talon, Tableau};

        let count = match (from, to) {
            _ if from == to => return None,
            (Stock, Talon) => {
                let card = self.stock.pop()?;
                self.talon.push(card);
                1
            }
            (Foundation(_), Talon) => {
                let card = self.take_top(from)?;
                self.talon.push(card);
                1
            }
            (Stock | Talon | Foundation(_), Foundation(_) | Tableau(_))
            | (Tableau(_), Foundation(_)) => {
                let card = self.top(from)?;
                if !self.accepts(to, card) {
                    return None;
                }
                self.take_top(from)?;
                self.place(to, card);
                1
            }
            (Tableau(i), Tableau(j)) => self.move_run(i as usize, j as usize)?,
            _ => return None,
        };

        Some(Move { from, to, count })
    }

    /// Move the longest legal face-up run from tableau `i` onto tableau `j`.
    ///
    /// Scans face-up cards bottom-up and moves everything from the first
    /// card the destination accepts. The run's own ordering is not checked.
    fn move_run(&mut self, i: usize, j: usize) -> Option<usize> {
        let source = &self.tableau[i];
        let offset = source
            .face_up()
            .iter()
            .position(|&card| can_play_on_tableau(card, &self.tableau[j]))?;
        let start = source.hidden() + offset;
        let run = self.tableau[i].take_run(start)?;
        let count = run.len();
        self.tableau[j].extend_run(run);
        Some(count)
    }

    fn accepts(&self, pile: PileSelector, card: Card) -> bool {
        match pile {
            PileSelector::Foundation(j) => can_play_on_foundation(
                card,
                &self.foundations[j as usize],
                j as usize,
                self.strict_foundation_suits,
            ),
            PileSelector::Tableau(j) => can_play_on_tableau(card, &self.tableau[j as usize]),
            PileSelector::Stock | PileSelector::Talon => false,
        }
    }

    fn take_top(&mut self, pile: PileSelector) -> Option<Card> {
        match pile {
            PileSelector::Stock => self.stock.pop(),
            PileSelector::Talon => self.talon.pop(),
            PileSelector::Foundation(i) => self.foundations[i as usize].pop(),
            PileSelector::Tableau(i) => self.tableau[i as usize].pop(),
        }
    }

    fn place(&mut self, pile: PileSelector, card: Card) {
        match pile {
            PileSelector::Stock => self.stock.push(card),
            PileSelector::Talon => self.talon.push(card),
            PileSelector::Foundation(i) => self.foundations[i as usize].push(card),
            PileSelector::Tableau(i) => self.tableau[i as usize].push(card),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DECK_SIZE;
    use std::collections::HashSet;

    #[test]
    fn test_deal_layout() {
        let table = Tabletop::deal(&mut GameRng::new(42));

        assert_eq!(table.stock().len(), 24);
        assert!(table.talon().is_empty());
        for (i, pile) in table.tableaus().iter().enumerate() {
            assert_eq!(pile.len(), i + 1);
            assert_eq!(pile.hidden(), i);
            assert_eq!(pile.face_up().len(), 1);
        }
        for foundation in table.foundations() {
            assert!(foundation.is_empty());
        }
        assert!(table.selection().is_idle());
        assert!(!table.is_won());
    }

    #[test]
    fn test_deal_uses_every_card_once() {
        let table = Tabletop::deal(&mut GameRng::new(7));
        let cards: HashSet<Card> = table.cards().collect();
        assert_eq!(cards.len(), DECK_SIZE);
        assert_eq!(table.cards().count(), DECK_SIZE);
    }

    #[test]
    fn test_deal_is_deterministic() {
        let a = Tabletop::deal(&mut GameRng::new(1234));
        let b = Tabletop::deal(&mut GameRng::new(1234));
        let c = Tabletop::deal(&mut GameRng::new(4321));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_deal_peels_from_end_of_shuffle() {
        let mut rng = GameRng::new(99);
        let table = Tabletop::deal(&mut rng.clone());

        let mut deck: Vec<Card> = Card::full_deck().collect();
        rng.shuffle(&mut deck);

        assert_eq!(table.tableau(0).cards(), &deck[51..]);
        assert_eq!(table.tableau(1).cards(), &deck[49..51]);
        assert_eq!(table.tableau(6).cards(), &deck[24..31]);
        assert_eq!(table.stock().cards(), &deck[..24]);
    }

    #[test]
    fn test_deal_with_strict_config() {
        let config = TableConfig::default().with_strict_foundation_suits(true);
        let table = Tabletop::deal_with_config(&config, &mut GameRng::new(3));
        assert!(table.strict_foundation_suits());
    }

    #[test]
    fn test_first_key_selects_even_empty_pile() {
        let mut table = Tabletop::deal(&mut GameRng::new(42));
        assert_eq!(
            table.select(Some(PileSelector::Talon)),
            SelectOutcome::Selected(PileSelector::Talon)
        );
        assert_eq!(table.selection(), Selection::SourceChosen(PileSelector::Talon));

        let before = table.clone();
        let outcome = table.select(Some(PileSelector::Tableau(0)));
        assert!(matches!(outcome, SelectOutcome::Rejected { .. }));
        assert!(table.selection().is_idle());
        assert_eq!(table, before_with_idle(before));
    }

    #[test]
    fn test_unrecognized_keys() {
        let mut table = Tabletop::deal(&mut GameRng::new(42));
        assert_eq!(table.select(None), SelectOutcome::Ignored);
        assert_eq!(table.select(Some(PileSelector::Tableau(9))), SelectOutcome::Ignored);
        assert!(table.selection().is_idle());

        table.select(Some(PileSelector::Stock));
        let before = table.clone();
        assert_eq!(
            table.select(None),
            SelectOutcome::Rejected {
                from: PileSelector::Stock,
                to: None,
            }
        );
        assert_eq!(table, before_with_idle(before));
    }

    #[test]
    fn test_same_key_twice_is_a_miss() {
        let mut table = Tabletop::deal(&mut GameRng::new(42));
        for pile in PileSelector::ALL {
            let before = table.clone();
            table.select(Some(pile));
            let outcome = table.select(Some(pile));
            assert!(matches!(outcome, SelectOutcome::Rejected { .. }), "{pile}");
            assert_eq!(table, before);
        }
    }

    #[test]
    fn test_select_key_uses_keymap() {
        let mut table = Tabletop::deal(&mut GameRng::new(42));
        let keymap = KeyMap::default();
        let top = table.stock().top();

        assert_eq!(table.select_key('z', &keymap), SelectOutcome::Ignored);
        table.select_key('q', &keymap);
        let outcome = table.select_key('w', &keymap);

        assert_eq!(
            outcome.moved(),
            Some(Move {
                from: PileSelector::Stock,
                to: PileSelector::Talon,
                count: 1,
            })
        );
        assert_eq!(table.talon().top(), top);
        assert_eq!(table.stock().len(), 23);
    }

    #[test]
    fn test_draw_whole_stock() {
        let mut table = Tabletop::deal(&mut GameRng::new(5));
        let mut expected: Vec<Card> = table.stock().cards().to_vec();
        expected.reverse();

        for _ in 0..24 {
            table.select(Some(PileSelector::Stock));
            table.select(Some(PileSelector::Talon));
        }
        assert!(table.stock().is_empty());
        assert_eq!(table.talon().cards(), expected.as_slice());

        // Empty stock: drawing is a no-op.
        let before = table.clone();
        table.select(Some(PileSelector::Stock));
        let outcome = table.select(Some(PileSelector::Talon));
        assert!(matches!(outcome, SelectOutcome::Rejected { .. }));
        assert_eq!(table, before);
    }

    fn before_with_idle(mut table: Tabletop) -> Tabletop {
        table.selection = Selection::Idle;
        table
    }
}
