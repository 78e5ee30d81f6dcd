//! # Ranking
//!
//! Orders search results by hashtag affinity with the current cart.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart: A #fruit #sweet                                                  │
//! │                                                                         │
//! │  1. Profile     { fruit: 1, sweet: 1 }   one count per occurrence      │
//! │                                                                         │
//! │  2. Affinity    B #fruit          → 1                                   │
//! │                 C #sweet #sweet   → 1 + 1 = 2   (repeats count again)  │
//! │                 D #spicy          → 0                                   │
//! │                                                                         │
//! │  3. Sort        score desc, then name asc  → C, B, D                    │
//! │                                                                         │
//! │  4. Drop        candidates already in the cart                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The profile is rebuilt on every call; the cart may have changed since
//! the previous search.

use std::collections::HashMap;

use crate::cart::Cart;
use crate::types::Item;

/// Hashtag frequency multiset built from a set of items.
#[derive(Debug, Clone, Default)]
pub struct HashtagProfile<'a> {
    counts: HashMap<&'a str, usize>,
}

impl<'a> HashtagProfile<'a> {
    /// Counts every hashtag occurrence across `items`.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let mut counts = HashMap::new();
        for tag in items.into_iter().flat_map(|i| i.hashtags.iter()) {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
        HashtagProfile { counts }
    }

    /// Occurrences of `tag` in the profile.
    #[inline]
    pub fn count(&self, tag: &str) -> usize {
        self.counts.get(tag).copied().unwrap_or(0)
    }

    /// Affinity score of `item`: the profile count of each of its hashtags,
    /// summed once per occurrence.
    pub fn affinity(&self, item: &Item) -> usize {
        item.hashtags.iter().map(|tag| self.count(tag)).sum()
    }
}

/// Ranks `candidates` against `cart`, dropping those already in the cart.
pub fn rank<'c, I>(candidates: I, cart: &Cart) -> Vec<&'c Item>
where
    I: IntoIterator<Item = &'c Item>,
{
    let profile = HashtagProfile::from_items(cart.items());

    let mut scored: Vec<(usize, &'c Item)> = candidates
        .into_iter()
        .filter(|item| !cart.contains(item))
        .map(|item| (profile.affinity(item), item))
        .collect();

    scored.sort_by(|(score_a, a), (score_b, b)| {
        score_b.cmp(score_a).then_with(|| a.name.cmp(&b.name))
    });

    scored.into_iter().map(|(_, item)| item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, hashtags: &[&str]) -> Item {
        Item::new(name, 1, hashtags.iter().copied(), "")
    }

    fn names(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.name.clone()).collect()
    }

    #[test]
    fn test_profile_counts_every_occurrence() {
        let a = item("A", &["fruit", "sweet", "sweet"]);
        let b = item("B", &["fruit"]);
        let profile = HashtagProfile::from_items([&a, &b]);

        assert_eq!(profile.count("fruit"), 2);
        assert_eq!(profile.count("sweet"), 2);
        assert_eq!(profile.count("spicy"), 0);
    }

    #[test]
    fn test_affinity_counts_candidate_repeats() {
        let a = item("A", &["fruit", "sweet"]);
        let profile = HashtagProfile::from_items([&a]);

        assert_eq!(profile.affinity(&item("C", &["sweet", "sweet"])), 2);
        assert_eq!(profile.affinity(&item("B", &["fruit"])), 1);
        assert_eq!(profile.affinity(&item("D", &["spicy"])), 0);
    }

    #[test]
    fn test_rank_by_score_then_name() {
        let a = item("A", &["fruit", "sweet"]);
        let mut cart = Cart::new();
        cart.add(a.clone()).unwrap();

        let b = item("B", &["fruit"]);
        let c = item("C", &["sweet", "sweet"]);
        let d = item("D", &["spicy"]);
        let ranked = rank([&d, &b, &a, &c], &cart);

        assert_eq!(names(&ranked), ["C", "B", "D"]);
    }

    #[test]
    fn test_rank_ties_break_on_name() {
        let cart = Cart::new();
        let x = item("Zucchini", &["veg"]);
        let y = item("Apple", &["fruit"]);
        let z = item("Mango", &[]);

        let ranked = rank([&x, &y, &z], &cart);

        assert_eq!(names(&ranked), ["Apple", "Mango", "Zucchini"]);
    }

    #[test]
    fn test_rank_name_order_is_case_sensitive() {
        let cart = Cart::new();
        let lower = item("apple", &[]);
        let upper = item("Banana", &[]);

        let ranked = rank([&lower, &upper], &cart);

        assert_eq!(names(&ranked), ["Banana", "apple"]);
    }

    #[test]
    fn test_rank_excludes_high_scoring_cart_items() {
        let mut cart = Cart::new();
        let hot = item("Chili", &["spicy", "spicy"]);
        cart.add(hot.clone()).unwrap();

        let bread = item("Bread", &[]);
        let ranked = rank([&hot, &bread], &cart);

        assert_eq!(names(&ranked), ["Bread"]);
    }
}
