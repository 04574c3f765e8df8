//! Pure aggregate functions over a snapshot of the venture collection.
//!
//! None of these functions hold state; callers recompute them whenever the
//! collection changes. Arg-max helpers resolve ties in favour of the venture
//! that appears first in the slice.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::venture::{ReactionKind, Venture};

/// Sum of `views` across all ventures.
pub fn total_views(ventures: &[Venture]) -> u64 {
    ventures.iter().fold(0u64, |acc, v| acc.saturating_add(v.views))
}

/// Sum of all six reaction counters across all ventures.
pub fn total_reactions(ventures: &[Venture]) -> u64 {
    ventures
        .iter()
        .fold(0u64, |acc, v| acc.saturating_add(v.total_reactions()))
}

/// Reactions per hundred views. Zero when nothing has been viewed, whatever
/// the reaction count.
pub fn engagement_rate(ventures: &[Venture]) -> f64 {
    let views = total_views(ventures);
    if views == 0 {
        return 0.0;
    }
    total_reactions(ventures) as f64 / views as f64 * 100.0
}

pub fn most_viewed(ventures: &[Venture]) -> Option<&Venture> {
    first_max_by_key(ventures, |v| v.views)
}

pub fn most_reacted(ventures: &[Venture]) -> Option<&Venture> {
    first_max_by_key(ventures, Venture::total_reactions)
}

// `Iterator::max_by_key` keeps the last maximum; the dashboard keeps the first.
fn first_max_by_key<F>(ventures: &[Venture], key: F) -> Option<&Venture>
where
    F: Fn(&Venture) -> u64,
{
    let mut best: Option<(&Venture, u64)> = None;
    for venture in ventures {
        let score = key(venture);
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((venture, score)),
        }
    }
    best.map(|(venture, _)| venture)
}

/// Collection-wide count for one reaction kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionShare {
    pub kind: ReactionKind,
    pub label: &'static str,
    pub emoji: &'static str,
    pub count: u64,
    /// Share of all reactions, 0.0..=100.0. Zero when there are no reactions.
    pub percentage: f64,
}

/// Per-kind totals in canonical kind order.
pub fn reaction_breakdown(ventures: &[Venture]) -> Vec<ReactionShare> {
    let total = total_reactions(ventures);
    ReactionKind::ALL
        .into_iter()
        .map(|kind| {
            let count = ventures
                .iter()
                .fold(0u64, |acc, v| acc.saturating_add(v.reactions.get(kind)));
            let percentage = if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            };
            ReactionShare {
                kind,
                label: kind.label(),
                emoji: kind.emoji(),
                count,
                percentage,
            }
        })
        .collect()
}

/// Decade bucket for a launch year, e.g. 1997 -> 1990, -5 -> -10.
///
/// Widened to `i64` so the bucket of `i32::MIN` is representable.
pub fn decade_of(year: i32) -> i64 {
    i64::from(year).div_euclid(10) * 10
}

/// Venture counts keyed by launch decade, ascending.
pub fn ventures_by_decade(ventures: &[Venture]) -> BTreeMap<i64, usize> {
    let mut buckets = BTreeMap::new();
    for venture in ventures {
        *buckets.entry(decade_of(venture.year_launched)).or_insert(0) += 1;
    }
    buckets
}

/// The `n` most viewed ventures, highest first; ties keep collection order.
pub fn top_by_views(ventures: &[Venture], n: usize) -> Vec<&Venture> {
    top_by_key(ventures, n, |v| v.views)
}

/// The `n` most reacted-to ventures, highest first; ties keep collection order.
pub fn top_by_reactions(ventures: &[Venture], n: usize) -> Vec<&Venture> {
    top_by_key(ventures, n, Venture::total_reactions)
}

fn top_by_key<F>(ventures: &[Venture], n: usize, key: F) -> Vec<&Venture>
where
    F: Fn(&Venture) -> u64,
{
    let mut ranked: Vec<&Venture> = ventures.iter().collect();
    ranked.sort_by(|a, b| key(b).cmp(&key(a)));
    ranked.truncate(n);
    ranked
}

/// Mean views per venture, rounded to the nearest whole view.
pub fn average_views(ventures: &[Venture]) -> u64 {
    if ventures.is_empty() {
        return 0;
    }
    (total_views(ventures) as f64 / ventures.len() as f64).round() as u64
}

/// Inclusive number of calendar years between the earliest and latest launch.
pub fn year_span(ventures: &[Venture]) -> u64 {
    let years = ventures.iter().map(|v| v.year_launched);
    match (years.clone().min(), years.max()) {
        (Some(first), Some(last)) => u64::from(last.abs_diff(first)) + 1,
        _ => 0,
    }
}

#[cfg(test)]
#[path = "aggregates_test.rs"]
mod aggregates_test;
