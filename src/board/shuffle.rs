//! Dealing pairs onto the board.

use crate::content::ContentPair;
use crate::core::{Card, CardId, GameRng};

/// Uniform in-place shuffle on the board's RNG stream.
pub fn shuffle<T>(items: &mut [T], rng: &mut GameRng) {
    rng.shuffle(items);
}

/// Expand pairs into face-down cards in shuffled board order.
///
/// Card IDs are assigned after shuffling, so `cards[i].id == CardId(i)`.
pub fn deal(pairs: Vec<ContentPair>, rng: &mut GameRng) -> Vec<Card> {
    let mut faces = Vec::with_capacity(pairs.len() * 2);
    for pair in pairs {
        faces.push((pair.key, pair.first));
        faces.push((pair.key, pair.second));
    }

    shuffle(&mut faces, rng);

    faces
        .into_iter()
        .enumerate()
        .map(|(i, (key, content))| Card::new(CardId::new(i as u32), key, content))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CardContent;
    use crate::core::PairKey;
    use rustc_hash::FxHashMap;

    fn pairs(n: u32) -> Vec<ContentPair> {
        (0..n)
            .map(|i| ContentPair::twin(PairKey::new(i), CardContent::Number(i)))
            .collect()
    }

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut rng = GameRng::new(42);
        let mut data: Vec<u32> = (1..=10).collect();
        let original = data.clone();

        shuffle(&mut data, &mut rng);

        assert_ne!(data, original);
        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_shuffle_handles_tiny_slices() {
        let mut rng = GameRng::new(1);
        let mut empty: Vec<u8> = Vec::new();
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut one = vec![9];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, vec![9]);
    }

    #[test]
    fn test_shuffle_is_roughly_uniform() {
        // Count where element 0 lands over many shuffles of 4 items.
        let mut rng = GameRng::new(99);
        let mut landed = [0u32; 4];
        for _ in 0..8000 {
            let mut data = [0, 1, 2, 3];
            shuffle(&mut data, &mut rng);
            let pos = data.iter().position(|&v| v == 0).unwrap();
            landed[pos] += 1;
        }
        for count in landed {
            assert!((1700..2300).contains(&count), "skewed distribution: {landed:?}");
        }
    }

    #[test]
    fn test_deal_assigns_positions() {
        let mut rng = GameRng::new(42);
        let cards = deal(pairs(4), &mut rng);

        assert_eq!(cards.len(), 8);
        for (i, card) in cards.iter().enumerate() {
            assert_eq!(card.id, CardId::new(i as u32));
            assert!(!card.is_revealed());
        }
    }

    #[test]
    fn test_deal_each_key_twice() {
        let mut rng = GameRng::new(7);
        let cards = deal(pairs(12), &mut rng);

        let mut counts: FxHashMap<PairKey, usize> = FxHashMap::default();
        for card in &cards {
            *counts.entry(card.key).or_default() += 1;
        }
        assert_eq!(counts.len(), 12);
        assert!(counts.values().all(|&c| c == 2));
    }

    #[test]
    fn test_deal_is_deterministic() {
        let a = deal(pairs(8), &mut GameRng::new(5));
        let b = deal(pairs(8), &mut GameRng::new(5));
        assert_eq!(a, b);
    }
}
