// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand value types and five cards evaluation.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, hash};
use thiserror::Error;

use holdem_cards::{Card, Rank};

/// Evaluation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A poker hand needs at least five cards.
    #[error("a hand needs at least 5 cards, got {0}")]
    InsufficientCards(usize),
}

/// The hand category, ordered from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Ace high straight flush.
    RoyalFlush,
}

impl HandRank {
    /// Returns all categories from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        };

        f.write_str(label)
    }
}

/// A list of up to five ranks, used for buckets and tie-break keys so that
/// evaluation doesn't allocate.
#[derive(Clone, Copy)]
struct RankList {
    ranks: [Rank; 5],
    len: usize,
}

impl RankList {
    fn push(&mut self, rank: Rank) {
        if self.len < self.ranks.len() {
            self.ranks[self.len] = rank;
            self.len += 1;
        }
    }

    fn first(&self) -> Option<Rank> {
        self.as_slice().first().copied()
    }

    fn get(&self, idx: usize) -> Option<Rank> {
        self.as_slice().get(idx).copied()
    }

    fn as_slice(&self) -> &[Rank] {
        &self.ranks[..self.len]
    }
}

impl Default for RankList {
    fn default() -> Self {
        Self {
            ranks: [Rank::Two; 5],
            len: 0,
        }
    }
}

impl Extend<Rank> for RankList {
    fn extend<I: IntoIterator<Item = Rank>>(&mut self, iter: I) {
        iter.into_iter().for_each(|r| self.push(r));
    }
}

impl FromIterator<Rank> for RankList {
    fn from_iter<I: IntoIterator<Item = Rank>>(iter: I) -> Self {
        let mut list = Self::default();
        list.extend(iter);
        list
    }
}

impl PartialEq for RankList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for RankList {}

impl PartialOrd for RankList {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankList {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl fmt::Debug for RankList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// The value of a poker hand.
///
/// Values are compared by category first and then by the tie-break key, the
/// five cards are only kept to show the hand and do not take part in
/// comparisons, so two values are equal when the hands split the pot.
#[derive(Debug, Clone, Copy)]
pub struct HandValue {
    rank: HandRank,
    tie_break: RankList,
    hand: [Card; 5],
}

impl HandValue {
    /// Evaluates a hand of five or more cards and returns the value of the best
    /// five cards hand.
    ///
    /// Duplicated cards are not detected, passing the same card twice is a
    /// caller error.
    pub fn eval(cards: &[Card]) -> Result<Self, EvalError> {
        let n = cards.len();
        if n < 5 {
            return Err(EvalError::InsufficientCards(n));
        }

        let mut best = Self::eval5([cards[0], cards[1], cards[2], cards[3], cards[4]]);
        if n == 5 {
            return Ok(best);
        }

        // Try every 5 cards subset, ties keep the first best hand.
        for c1 in 0..n {
            for c2 in (c1 + 1)..n {
                for c3 in (c2 + 1)..n {
                    for c4 in (c3 + 1)..n {
                        for c5 in (c4 + 1)..n {
                            let hand = [cards[c1], cards[c2], cards[c3], cards[c4], cards[c5]];
                            let value = Self::eval5(hand);
                            if value > best {
                                best = value;
                            }
                        }
                    }
                }
            }
        }

        Ok(best)
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The ranks used to break ties between hands of the same category, most
    /// significant first.
    pub fn tie_break(&self) -> &[Rank] {
        self.tie_break.as_slice()
    }

    /// The five cards that make this hand sorted by descending rank.
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Evaluates exactly five cards.
    fn eval5(mut hand: [Card; 5]) -> Self {
        hand.sort_by(|c1, c2| c2.rank().cmp(&c1.rank()));
        let ranks = hand.map(|c| c.rank());

        let is_flush = hand.iter().all(|c| c.suit() == hand[0].suit());
        let straight_high = straight_high(&ranks);

        // Bucket ranks by count, ranks are sorted so buckets are sorted too.
        let mut quads = RankList::default();
        let mut trips = RankList::default();
        let mut pairs = RankList::default();
        let mut pos = 0;
        while pos < ranks.len() {
            let rank = ranks[pos];
            let count = ranks[pos..].iter().take_while(|&&r| r == rank).count();
            match count {
                4 => quads.push(rank),
                3 => trips.push(rank),
                2 => pairs.push(rank),
                _ => {}
            }

            pos += count;
        }

        let (rank, tie_break) = if let (true, Some(high)) = (is_flush, straight_high) {
            if high == Rank::Ace {
                (HandRank::RoyalFlush, RankList::from_iter([Rank::Ace]))
            } else {
                (HandRank::StraightFlush, RankList::from_iter([high]))
            }
        } else if let Some(quad) = quads.first() {
            let mut key = RankList::from_iter([quad]);
            key.extend(kickers(ranks, &[quad], 1));
            (HandRank::FourOfAKind, key)
        } else if let Some(full) = full_house(&trips, &pairs) {
            (HandRank::FullHouse, full)
        } else if is_flush {
            (HandRank::Flush, RankList::from_iter(ranks))
        } else if let Some(high) = straight_high {
            (HandRank::Straight, RankList::from_iter([high]))
        } else if let Some(trip) = trips.first() {
            let mut key = RankList::from_iter([trip]);
            key.extend(kickers(ranks, &[trip], 2));
            (HandRank::ThreeOfAKind, key)
        } else if let (Some(high), Some(low)) = (pairs.first(), pairs.get(1)) {
            let mut key = RankList::from_iter([high, low]);
            key.extend(kickers(ranks, &[high, low], 1));
            (HandRank::TwoPair, key)
        } else if let Some(pair) = pairs.first() {
            let mut key = RankList::from_iter([pair]);
            key.extend(kickers(ranks, &[pair], 3));
            (HandRank::OnePair, key)
        } else {
            (HandRank::HighCard, RankList::from_iter(ranks))
        };

        Self {
            rank,
            tie_break,
            hand,
        }
    }
}

/// Returns the straight high card for ranks sorted in descending order.
fn straight_high(ranks: &[Rank; 5]) -> Option<Rank> {
    use Rank::*;

    if ranks.windows(2).all(|w| w[0].pred() == Some(w[1])) {
        Some(ranks[0])
    } else if ranks == &[Ace, Five, Four, Three, Two] {
        // The wheel plays the Ace low.
        Some(Five)
    } else {
        None
    }
}

/// The best `n` ranks that are not part of the made hand.
fn kickers(ranks: [Rank; 5], made: &[Rank], n: usize) -> impl Iterator<Item = Rank> {
    ranks.into_iter().filter(move |r| !made.contains(r)).take(n)
}

/// Returns the full house key if there is a trips and a pair, a second trips
/// counts as the pair when it beats the best pair.
fn full_house(trips: &RankList, pairs: &RankList) -> Option<RankList> {
    let trip = trips.first()?;
    let pair = match (pairs.first(), trips.get(1)) {
        (Some(pair), Some(second)) => pair.max(second),
        (Some(pair), None) => pair,
        (None, Some(second)) => second,
        (None, None) => return None,
    };

    Some(RankList::from_iter([trip, pair]))
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.tie_break == other.tie_break
    }
}

impl Eq for HandValue {}

impl hash::Hash for HandValue {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.tie_break.as_slice().hash(state);
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.tie_break.cmp(&other.tie_break))
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.rank)?;
        for card in &self.hand {
            write!(f, " {card}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashSet;
    use holdem_cards::{Deck, parse_cards};
    use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

    fn eval(s: &str) -> HandValue {
        HandValue::eval(&parse_cards(s).unwrap()).unwrap()
    }

    fn ranks(s: &str) -> Vec<Rank> {
        parse_cards(s).unwrap().iter().map(|c| c.rank()).collect()
    }

    #[test]
    fn royal_and_straight_flush() {
        let royal = eval("As Ks Qs Js Ts");
        assert_eq!(royal.rank(), HandRank::RoyalFlush);
        assert_eq!(royal.tie_break(), &[Rank::Ace]);

        let sf = eval("6s 7s 8s 9s Ts");
        assert_eq!(sf.rank(), HandRank::StraightFlush);
        assert_eq!(sf.tie_break(), &[Rank::Ten]);

        let quads = eval("Ah Ad Ac As Kd");
        assert_eq!(quads.rank(), HandRank::FourOfAKind);

        assert!(royal > sf);
        assert!(sf > quads);

        // King high straight flush is still below a royal flush.
        let kh_sf = eval("9d Td Jd Qd Kd");
        assert_eq!(kh_sf.rank(), HandRank::StraightFlush);
        assert!(royal > kh_sf);
        assert!(kh_sf > sf);
    }

    #[test]
    fn wheel_straight() {
        let wheel = eval("As 2d 3c 4h 5s");
        assert_eq!(wheel.rank(), HandRank::Straight);
        assert_eq!(wheel.tie_break(), &[Rank::Five]);

        let six_high = eval("2s 3d 4c 5h 6s");
        assert_eq!(six_high.rank(), HandRank::Straight);
        assert!(six_high > wheel);
        assert!(eval("2s 3s 4s 5s 6s") > wheel);

        assert!(wheel > eval("Ks Kd Kc Qh Jd"));
        assert!(wheel > eval("Ks Kd Qc Qh Jd"));
        assert!(wheel > eval("As Kd Qc Jh 9d"));

        let wheel_flush = eval("Ah 2h 3h 4h 5h");
        assert_eq!(wheel_flush.rank(), HandRank::StraightFlush);
        assert_eq!(wheel_flush.tie_break(), &[Rank::Five]);
        assert!(eval("2h 3h 4h 5h 6h") > wheel_flush);

        // No wrap around straights.
        assert_eq!(eval("Qs Kd Ac 2h 3d").rank(), HandRank::HighCard);
    }

    #[test]
    fn categories_and_keys() {
        let cases = [
            ("9h 9d 9c 9s 2d", HandRank::FourOfAKind, "9h 2d"),
            ("Kh Kd Kc 4s 4d", HandRank::FullHouse, "Kh 4d"),
            ("Ah Jh 8h 6h 2h", HandRank::Flush, "Ah Jh 8h 6h 2h"),
            ("9h Td Jc Qs Kd", HandRank::Straight, "Kd"),
            ("7h 7d 7c As 2d", HandRank::ThreeOfAKind, "7h As 2d"),
            ("Jh Jd 3c 3s Ad", HandRank::TwoPair, "Jh 3c Ad"),
            ("Th Td Kc 8s 2d", HandRank::OnePair, "Th Kc 8s 2d"),
            ("Ah Jd 8c 6s 2d", HandRank::HighCard, "Ah Jd 8c 6s 2d"),
        ];

        for (hand, rank, key) in cases {
            let value = eval(hand);
            assert_eq!(value.rank(), rank, "{hand}");
            assert_eq!(value.tie_break(), ranks(key).as_slice(), "{hand}");
            assert_eq!(value.hand().len(), 5);
        }
    }

    #[test]
    fn seven_cards_best_hand() {
        // Two trips make a full house with the lower trips as the pair.
        let v = eval("Ah Ad Ac Kh Kd Ks 2c");
        assert_eq!(v.rank(), HandRank::FullHouse);
        assert_eq!(v.tie_break(), &[Rank::Ace, Rank::King]);

        // A pair that beats the second trips is used instead.
        let v = eval("5h 5d 5c 4h 4d 4s Ac");
        assert_eq!(v.tie_break(), &[Rank::Five, Rank::Four]);
        let v = eval("5h 5d 5c 4h 4d Ks Kc");
        assert_eq!(v.tie_break(), &[Rank::Five, Rank::King]);

        // Quads with trips take the best kicker.
        let v = eval("9h 9d 9c 9s Kh Kd Kc");
        assert_eq!(v.rank(), HandRank::FourOfAKind);
        assert_eq!(v.tie_break(), &[Rank::Nine, Rank::King]);

        // Three pairs keep the best two and the best kicker.
        let v = eval("Qh Qd 8c 8s 3h 3d 7c");
        assert_eq!(v.rank(), HandRank::TwoPair);
        assert_eq!(v.tie_break(), &[Rank::Queen, Rank::Eight, Rank::Seven]);

        // Flush over straight.
        let v = eval("2h 5h 9h Jh 6d 7c 8h");
        assert_eq!(v.rank(), HandRank::Flush);
        assert_eq!(
            v.tie_break(),
            &[Rank::Jack, Rank::Nine, Rank::Eight, Rank::Five, Rank::Two]
        );

        // Best straight of a six cards run.
        let v = eval("4h 5d 6c 7s 8h 9d Kc");
        assert_eq!(v.rank(), HandRank::Straight);
        assert_eq!(v.tie_break(), &[Rank::Nine]);

        // Royal flush with extra cards.
        let v = eval("Kc Ac Qc Jc 2d Tc 9c");
        assert_eq!(v.rank(), HandRank::RoyalFlush);
        assert!(v.hand().iter().all(|c| c.rank() >= Rank::Ten));
    }

    #[test]
    fn kickers_decide() {
        assert!(eval("Ah Ad Kc 8s 2d") > eval("As Ac Qc Js Td"));
        assert!(eval("Jh Jd 3c 3s Ad") > eval("Js Jc 3h 3d Kd"));
        assert!(eval("Kh Kd Kc 2s 2d") > eval("Qs Qc Qh As Ad"));
        assert!(eval("Ah Jh 8h 6h 3h") > eval("As Js 8s 6s 2s"));
        assert!(eval("7h 7d 7c As 3d") > eval("7s 7d 7c Ks Qd"));

        // Same strength with different suits.
        assert_eq!(eval("Ah Kd Qc Js 9d"), eval("As Kh Qd Jc 9s"));
        assert_eq!(eval("9h Td Jc Qs Kd"), eval("9s Tc Jd Qh Kh"));
    }

    #[test]
    fn shared_board_ties() {
        let board = "Ah Kh Qh Jh Th";
        let p1 = eval(&format!("2c 3d {board}"));
        let p2 = eval(&format!("9c 9d {board}"));
        assert_eq!(p1, p2);
        assert_eq!(p1.cmp(&p2), Ordering::Equal);
    }

    #[test]
    fn five_cards_identity() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1_000 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let cards = deck.deal_n(5).unwrap();
            let value = HandValue::eval(&cards).unwrap();
            let direct = HandValue::eval5([cards[0], cards[1], cards[2], cards[3], cards[4]]);
            assert_eq!(value, direct);
            assert_eq!(value.rank(), direct.rank());
            assert_eq!(value.tie_break(), direct.tie_break());
        }
    }

    #[test]
    fn insufficient_cards() {
        assert_eq!(HandValue::eval(&[]), Err(EvalError::InsufficientCards(0)));

        let cards = parse_cards("Ah Kh Qh Jh").unwrap();
        assert_eq!(
            HandValue::eval(&cards),
            Err(EvalError::InsufficientCards(4))
        );
    }

    #[test]
    fn permutation_invariance() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1_000 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let mut cards = deck.deal_n(7).unwrap();
            let value = HandValue::eval(&cards).unwrap();

            cards.shuffle(&mut rng);
            let shuffled = HandValue::eval(&cards).unwrap();
            assert_eq!(value, shuffled);
            assert_eq!(value.tie_break(), shuffled.tie_break());

            cards.reverse();
            assert_eq!(value, HandValue::eval(&cards).unwrap());
        }
    }

    #[test]
    fn total_order() {
        let mut rng = StdRng::seed_from_u64(17);
        let values = (0..300)
            .map(|_| {
                let mut deck = Deck::new_and_shuffled(&mut rng);
                HandValue::eval(&deck.deal_n(7).unwrap()).unwrap()
            })
            .collect::<Vec<_>>();

        for a in &values {
            for b in &values {
                // Antisymmetry.
                assert_eq!(a.cmp(b), b.cmp(a).reverse());
                assert_eq!(a == b, a.cmp(b) == Ordering::Equal);
            }
        }

        for a in values.iter().take(60) {
            for b in values.iter().take(60) {
                for c in values.iter().take(60) {
                    // Transitivity.
                    if a <= b && b <= c {
                        assert!(a <= c);
                    }
                }
            }
        }

        // Equal values have equal keys length.
        let mut sorted = values.clone();
        sorted.sort();
        for w in sorted.windows(2) {
            assert!(w[0] <= w[1]);
            if w[0].rank() == w[1].rank() {
                assert_eq!(w[0].tie_break().len(), w[1].tie_break().len());
            }
        }
    }

    #[test]
    fn all_five_cards_hands() {
        let mut counts = [0usize; 10];
        let mut values = AHashSet::default();
        let cards = Deck::default().into_iter().collect::<Vec<_>>();
        let n = cards.len();

        for c1 in 0..n {
            for c2 in (c1 + 1)..n {
                for c3 in (c2 + 1)..n {
                    for c4 in (c3 + 1)..n {
                        for c5 in (c4 + 1)..n {
                            let hand = [cards[c1], cards[c2], cards[c3], cards[c4], cards[c5]];
                            let value = HandValue::eval5(hand);
                            counts[value.rank() as usize] += 1;
                            values.insert(value);
                        }
                    }
                }
            }
        }

        assert_eq!(counts[HandRank::HighCard as usize], 1_302_540);
        assert_eq!(counts[HandRank::OnePair as usize], 1_098_240);
        assert_eq!(counts[HandRank::TwoPair as usize], 123_552);
        assert_eq!(counts[HandRank::ThreeOfAKind as usize], 54_912);
        assert_eq!(counts[HandRank::Straight as usize], 10_200);
        assert_eq!(counts[HandRank::Flush as usize], 5_108);
        assert_eq!(counts[HandRank::FullHouse as usize], 3_744);
        assert_eq!(counts[HandRank::FourOfAKind as usize], 624);
        assert_eq!(counts[HandRank::StraightFlush as usize], 36);
        assert_eq!(counts[HandRank::RoyalFlush as usize], 4);
        assert_eq!(counts.iter().sum::<usize>(), 2_598_960);

        // Distinct hand strengths.
        assert_eq!(values.len(), 7_462);
    }

    #[test]
    fn rank_labels() {
        let labels = HandRank::ranks().map(|r| r.to_string()).collect::<Vec<_>>();
        assert_eq!(labels.first().map(String::as_str), Some("High Card"));
        assert_eq!(labels.last().map(String::as_str), Some("Royal Flush"));
        assert!(HandRank::ranks().collect::<Vec<_>>().windows(2).all(|w| w[0] < w[1]));

        assert_eq!(
            eval("Kh Kd Kc 4s 4d").to_string(),
            "Full House: Kh Kd Kc 4s 4d"
        );
    }
}
