use std::fmt;

use itertools::Itertools;

use crate::frequency::FrequencyMap;

/// A token and its count, as ranked by [`top_k`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub token: String,
    pub count: u64,
}

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.token, self.count)
    }
}

/// The `k` most frequent tokens, highest count first.
///
/// Equal counts keep the order in which the tokens were first recorded. A
/// map with fewer than `k` entries is returned whole.
pub fn top_k(map: &FrequencyMap, k: usize) -> Vec<RankedEntry> {
    if k == 0 {
        return Vec::new();
    }
    // `sorted_by` is a stable sort, which is what carries the tie-break.
    let ranked: Vec<RankedEntry> = map
        .iter()
        .sorted_by(|a, b| b.1.cmp(&a.1))
        .take(k)
        .map(|(token, count)| RankedEntry {
            token: token.to_string(),
            count,
        })
        .collect();

    debug_assert!(ranked.windows(2).all(|w| w[0].count >= w[1].count));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_of(text: &str) -> FrequencyMap {
        let mut map = FrequencyMap::new();
        map.record_line(text);
        map
    }

    fn rendered(entries: &[RankedEntry]) -> Vec<String> {
        entries.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn renders_token_and_count() {
        let entry = RankedEntry {
            token: "ariel".to_string(),
            count: 7,
        };
        assert_eq!(entry.to_string(), "ariel (7)");
    }

    #[test]
    fn picks_highest_counts() {
        let map = map_of("the Tempest. The sea, the sea!");
        assert_eq!(rendered(&top_k(&map, 2)), ["the (3)", "sea (2)"]);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let map = map_of("gonzalo alonso sebastian alonso gonzalo antonio");
        assert_eq!(
            rendered(&top_k(&map, 4)),
            ["gonzalo (2)", "alonso (2)", "sebastian (1)", "antonio (1)"]
        );
    }

    #[test]
    fn short_map_is_returned_whole() {
        let map = map_of("one two two three three three");
        let ranked = top_k(&map, 10);

        assert_eq!(ranked.len(), map.len());
        for (token, count) in map.iter() {
            let hits = ranked.iter().filter(|e| e.token == token).count();
            assert_eq!(hits, 1, "token {token}");
            assert!(ranked.iter().any(|e| e.token == token && e.count == count));
        }
    }

    #[test]
    fn zero_and_empty_give_nothing() {
        assert!(top_k(&map_of("words here"), 0).is_empty());
        assert!(top_k(&FrequencyMap::new(), 5).is_empty());
    }
}
