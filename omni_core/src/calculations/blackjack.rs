//! # Blackjack Odds Calculation
//!
//! Computes the player's hand total (with ace reallocation), the basic
//! strategy recommendation for the dealer's up-card, and fixed odds
//! tables. The recommendation is a deterministic lookup keyed by
//! (player total, dealer up-card value), not a combinatorial simulation.
//!
//! ## Hand Total
//!
//! Non-ace cards are summed first; each ace then counts as 11 if the
//! running total stays at or below 21, otherwise as 1.
//!
//! ## Example
//!
//! ```rust
//! use omni_core::calculations::blackjack::{BlackjackInput, Card, calculate};
//!
//! let input = BlackjackInput {
//!     player_cards: vec![Card::Ace, Card::King],
//!     dealer_up_card: Card::Six,
//!     deck_count: 6,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.player_total, 21);
//! assert_eq!(result.recommendation, "Stand");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::report::{CalculationStep, Recommendation};

/// A playing card rank. Suits are irrelevant to the odds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Card {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Card {
    /// Blackjack value with the ace counted high (11).
    pub fn value_high(&self) -> u32 {
        match self {
            Card::Two => 2,
            Card::Three => 3,
            Card::Four => 4,
            Card::Five => 5,
            Card::Six => 6,
            Card::Seven => 7,
            Card::Eight => 8,
            Card::Nine => 9,
            Card::Ten | Card::Jack | Card::Queen | Card::King => 10,
            Card::Ace => 11,
        }
    }

    pub fn is_ace(&self) -> bool {
        matches!(self, Card::Ace)
    }
}

/// What basic strategy says to do with the hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayAction {
    Hit,
    Stand,
    DoubleDown,
    Bust,
}

impl PlayAction {
    pub fn display_name(&self) -> &'static str {
        match self {
            PlayAction::Hit => "Hit",
            PlayAction::Stand => "Stand",
            PlayAction::DoubleDown => "Double Down",
            PlayAction::Bust => "Bust",
        }
    }
}

/// Input parameters for the blackjack advisor.
///
/// ## JSON Example
///
/// ```json
/// {
///   "player_cards": ["Ten", "Six"],
///   "dealer_up_card": "Nine",
///   "deck_count": 6
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlackjackInput {
    /// The player's cards, at least the initial two
    pub player_cards: Vec<Card>,

    /// The dealer's visible card
    pub dealer_up_card: Card,

    /// Number of decks in the shoe, 1 through 8
    pub deck_count: u32,
}

impl BlackjackInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.player_cards.len() < 2 {
            return Err(CalcError::invalid_input(
                "player_cards",
                self.player_cards.len().to_string(),
                "A hand has at least two cards",
            ));
        }
        if self.deck_count < 1 || self.deck_count > 8 {
            return Err(CalcError::invalid_input(
                "deck_count",
                self.deck_count.to_string(),
                "Deck count must be between 1 and 8",
            ));
        }
        Ok(())
    }
}

/// Sum a hand, allocating each ace as 11 while the running total stays <= 21.
///
/// Returns the total and whether any ace is counted as 11 (a soft hand).
pub fn hand_total(cards: &[Card]) -> (u32, bool) {
    let ace_count = cards.iter().filter(|c| c.is_ace()).count() as u32;
    let mut total: u32 = cards.iter().filter(|c| !c.is_ace()).map(|c| c.value_high()).sum();
    let mut soft = false;
    // Each remaining ace contributes at least 1, so an ace only counts high
    // when the total plus the low aces still to come stays at or below 21.
    for remaining in (0..ace_count).rev() {
        if total + 11 + remaining <= 21 {
            total += 11;
            soft = true;
        } else {
            total += 1;
        }
    }
    (total, soft)
}

/// Dealer final-bust probability by up-card value (2..=11), percent.
///
/// Long-run frequencies under stand-on-soft-17 rules.
const DEALER_BUST_PCT: [(u32, f64); 10] = [
    (2, 35.30),
    (3, 37.56),
    (4, 40.28),
    (5, 42.89),
    (6, 42.08),
    (7, 25.99),
    (8, 23.86),
    (9, 23.34),
    (10, 21.43),
    (11, 11.65),
];

/// Probability the next card busts the player, by hard total, percent.
const PLAYER_BUST_ON_HIT_PCT: [(u32, f64); 10] = [
    (12, 31.0),
    (13, 39.0),
    (14, 56.0),
    (15, 58.0),
    (16, 62.0),
    (17, 69.0),
    (18, 77.0),
    (19, 85.0),
    (20, 92.0),
    (21, 100.0),
];

fn dealer_bust_pct(up_value: u32) -> f64 {
    DEALER_BUST_PCT
        .iter()
        .find(|(v, _)| *v == up_value)
        .map(|(_, p)| *p)
        .unwrap_or(0.0)
}

fn player_bust_on_hit_pct(total: u32) -> f64 {
    PLAYER_BUST_ON_HIT_PCT
        .iter()
        .find(|(t, _)| *t == total)
        .map(|(_, p)| *p)
        .unwrap_or(0.0)
}

/// Basic strategy for hard totals, keyed by (player total, dealer up value).
fn basic_strategy(player_total: u32, dealer_value: u32) -> PlayAction {
    if player_total > 21 {
        return PlayAction::Bust;
    }
    match player_total {
        17..=21 => PlayAction::Stand,
        13..=16 => {
            if (2..=6).contains(&dealer_value) {
                PlayAction::Stand
            } else {
                PlayAction::Hit
            }
        }
        12 => {
            if (4..=6).contains(&dealer_value) {
                PlayAction::Stand
            } else {
                PlayAction::Hit
            }
        }
        11 => PlayAction::DoubleDown,
        10 => {
            if (2..=9).contains(&dealer_value) {
                PlayAction::DoubleDown
            } else {
                PlayAction::Hit
            }
        }
        9 => {
            if (3..=6).contains(&dealer_value) {
                PlayAction::DoubleDown
            } else {
                PlayAction::Hit
            }
        }
        _ => PlayAction::Hit,
    }
}

/// Results from blackjack calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlackjackResult {
    /// Player hand total after ace allocation
    pub player_total: u32,

    /// Whether an ace is currently counted as 11
    pub is_soft: bool,

    /// Dealer up-card blackjack value (ace = 11)
    pub dealer_up_value: u32,

    /// The recommended action as display text ("Hit", "Stand", ...)
    pub recommendation: String,

    /// The recommended action as an enum for programmatic use
    pub action: PlayAction,

    /// Probability the dealer eventually busts, percent
    pub dealer_bust_pct: f64,

    /// Probability the next hit busts the player, percent
    pub player_bust_on_hit_pct: f64,

    /// Ordered calculation steps
    pub steps: Vec<CalculationStep>,

    /// Ordered recommendation entries
    pub recommendations: Vec<Recommendation>,
}

/// Calculate the hand total, strategy recommendation, and fixed odds.
pub fn calculate(input: &BlackjackInput) -> CalcResult<BlackjackResult> {
    input.validate()?;

    let (total, soft) = hand_total(&input.player_cards);
    let dealer_value = input.dealer_up_card.value_high();
    let action = basic_strategy(total, dealer_value);
    let dealer_bust = dealer_bust_pct(dealer_value);
    let player_bust = player_bust_on_hit_pct(total.min(21));

    let steps = vec![
        CalculationStep::new(
            "Player total",
            "sum non-aces, then each ace as 11 while total <= 21".to_string(),
            total as f64,
        ),
        CalculationStep::new(
            "Dealer bust odds",
            format!("lookup by up-card {}", dealer_value),
            dealer_bust,
        ),
        CalculationStep::new(
            "Player bust-on-hit odds",
            format!("lookup by total {}", total.min(21)),
            player_bust,
        ),
    ];

    let mut recommendations = vec![Recommendation::new("Strategy", action.display_name())];
    if action == PlayAction::Hit && player_bust > 50.0 {
        recommendations.push(Recommendation::new(
            "Odds",
            "More than half of the remaining ranks bust this hand; the hit is only justified by the dealer's strong up-card",
        ));
    }
    if input.deck_count > 1 {
        recommendations.push(Recommendation::new(
            "Shoe",
            "Each added deck raises the house edge slightly; basic strategy is unchanged",
        ));
    }

    Ok(BlackjackResult {
        player_total: total,
        is_soft: soft,
        dealer_up_value: dealer_value,
        recommendation: action.display_name().to_string(),
        action,
        dealer_bust_pct: dealer_bust,
        player_bust_on_hit_pct: player_bust,
        steps,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_total_no_aces() {
        let (total, soft) = hand_total(&[Card::Ten, Card::Six]);
        assert_eq!(total, 16);
        assert!(!soft);
    }

    #[test]
    fn test_hand_total_soft_ace() {
        let (total, soft) = hand_total(&[Card::Ace, Card::Nine]);
        assert_eq!(total, 20);
        assert!(soft);
    }

    #[test]
    fn test_hand_total_demoted_ace() {
        let (total, soft) = hand_total(&[Card::Ace, Card::Five, Card::Seven]);
        assert_eq!(total, 13);
        assert!(!soft);
    }

    #[test]
    fn test_hand_total_two_aces() {
        let (total, soft) = hand_total(&[Card::Ace, Card::Ace]);
        // One ace high, one low
        assert_eq!(total, 12);
        assert!(soft);
    }

    #[test]
    fn test_hand_total_ten_and_two_aces() {
        let (total, soft) = hand_total(&[Card::Ten, Card::Ace, Card::Ace]);
        // Both aces must count low
        assert_eq!(total, 12);
        assert!(!soft);
    }

    #[test]
    fn test_twenty_one_stands() {
        let input = BlackjackInput {
            player_cards: vec![Card::Ace, Card::King],
            dealer_up_card: Card::Ten,
            deck_count: 1,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.player_total, 21);
        assert_eq!(result.recommendation, "Stand");
    }

    #[test]
    fn test_bust_hand() {
        let input = BlackjackInput {
            player_cards: vec![Card::King, Card::Queen, Card::Five],
            dealer_up_card: Card::Two,
            deck_count: 1,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.player_total, 25);
        assert_eq!(result.recommendation, "Bust");
    }

    #[test]
    fn test_sixteen_vs_weak_dealer_stands() {
        let input = BlackjackInput {
            player_cards: vec![Card::Ten, Card::Six],
            dealer_up_card: Card::Six,
            deck_count: 6,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.recommendation, "Stand");
    }

    #[test]
    fn test_sixteen_vs_strong_dealer_hits() {
        let input = BlackjackInput {
            player_cards: vec![Card::Ten, Card::Six],
            dealer_up_card: Card::Nine,
            deck_count: 6,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.recommendation, "Hit");
    }

    #[test]
    fn test_eleven_doubles() {
        let input = BlackjackInput {
            player_cards: vec![Card::Six, Card::Five],
            dealer_up_card: Card::Ten,
            deck_count: 6,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.recommendation, "Double Down");
    }

    #[test]
    fn test_dealer_bust_table_monotone_through_six() {
        // Dealer bust odds peak at the five/six up-cards
        assert!(dealer_bust_pct(5) > dealer_bust_pct(2));
        assert!(dealer_bust_pct(6) > dealer_bust_pct(10));
        assert!(dealer_bust_pct(11) < dealer_bust_pct(10));
    }

    #[test]
    fn test_deck_count_bounds() {
        let mut input = BlackjackInput {
            player_cards: vec![Card::Ten, Card::Six],
            dealer_up_card: Card::Two,
            deck_count: 0,
        };
        assert!(calculate(&input).is_err());
        input.deck_count = 9;
        assert!(calculate(&input).is_err());
        input.deck_count = 8;
        assert!(calculate(&input).is_ok());
    }

    #[test]
    fn test_single_card_rejected() {
        let input = BlackjackInput {
            player_cards: vec![Card::Ten],
            dealer_up_card: Card::Two,
            deck_count: 1,
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = BlackjackInput {
            player_cards: vec![Card::Ace, Card::King],
            dealer_up_card: Card::Six,
            deck_count: 6,
        };
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"Ace\""));
        let roundtrip: BlackjackInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.player_cards, roundtrip.player_cards);
    }
}
