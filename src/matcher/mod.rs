mod ranking;

pub use ranking::{Ranking, match_ranking, strip_diacritics};

use crate::catalog::FruitOption;

/// Filters the catalog down to the options worth showing for a query.
///
/// Returns indices into `options`, best match first. Implementations must be
/// pure: no query may fail, an empty result is a valid answer.
pub trait OptionMatcher: Send + Sync {
    fn select(&self, query: &str, options: &[FruitOption]) -> Vec<usize>;
}

/// Tiered matcher over each option's label and keyword list.
///
/// An option ranks at the best tier any of its fields reaches, so a Japanese
/// keyword hit surfaces an option whose label shares nothing with the query.
#[derive(Debug, Default)]
pub struct RankedMatcher;

impl RankedMatcher {
    fn rank_option(option: &FruitOption, query: &str) -> Ranking {
        let mut best = match_ranking(option.label, query);
        for keyword in option.keywords {
            let rank = match_ranking(keyword, query);
            if rank > best {
                best = rank;
            }
        }
        best
    }
}

impl OptionMatcher for RankedMatcher {
    fn select(&self, query: &str, options: &[FruitOption]) -> Vec<usize> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return (0..options.len()).collect();
        }

        let mut ranked: Vec<(usize, Ranking)> = options
            .iter()
            .enumerate()
            .filter_map(|(idx, option)| {
                let rank = Self::rank_option(option, trimmed);
                rank.is_match().then_some((idx, rank))
            })
            .collect();

        // Stable sort keeps catalog order among equally ranked options.
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.into_iter().map(|(idx, _)| idx).collect()
    }
}
