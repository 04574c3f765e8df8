use std::collections::BTreeMap;

use serde::Serialize;

use super::aggregates::{self, ReactionShare};
use crate::domain::foundation::VentureId;
use crate::domain::venture::Venture;

/// Number of ranked ventures the dashboard shows by default.
pub const DEFAULT_TOP_N: usize = 5;

/// Everything the analytics dashboard renders, computed in one pass over a
/// snapshot of the collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub total_ventures: usize,
    pub total_views: u64,
    pub total_reactions: u64,
    /// Reactions per hundred views.
    pub engagement_rate: f64,
    pub average_views: u64,
    pub year_span: u64,
    pub most_viewed: Option<VentureSummary>,
    pub most_reacted: Option<VentureSummary>,
    pub reaction_breakdown: Vec<ReactionShare>,
    pub ventures_by_decade: BTreeMap<i64, usize>,
    pub top_by_views: Vec<VentureSummary>,
    pub top_by_reactions: Vec<VentureSummary>,
}

/// Compact row used in rankings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VentureSummary {
    pub id: VentureId,
    pub title: String,
    pub venture_name: String,
    pub year_launched: i32,
    pub views: u64,
    pub total_reactions: u64,
}

impl From<&Venture> for VentureSummary {
    fn from(venture: &Venture) -> Self {
        Self {
            id: venture.id.clone(),
            title: venture.title.clone(),
            venture_name: venture.venture_name.clone(),
            year_launched: venture.year_launched,
            views: venture.views,
            total_reactions: venture.total_reactions(),
        }
    }
}

impl AnalyticsSnapshot {
    /// Computes the dashboard aggregates, ranking the `top_n` ventures.
    pub fn compute(ventures: &[Venture], top_n: usize) -> Self {
        let summarize = |list: Vec<&Venture>| -> Vec<VentureSummary> {
            list.into_iter().map(VentureSummary::from).collect()
        };

        Self {
            total_ventures: ventures.len(),
            total_views: aggregates::total_views(ventures),
            total_reactions: aggregates::total_reactions(ventures),
            engagement_rate: aggregates::engagement_rate(ventures),
            average_views: aggregates::average_views(ventures),
            year_span: aggregates::year_span(ventures),
            most_viewed: aggregates::most_viewed(ventures).map(VentureSummary::from),
            most_reacted: aggregates::most_reacted(ventures).map(VentureSummary::from),
            reaction_breakdown: aggregates::reaction_breakdown(ventures),
            ventures_by_decade: aggregates::ventures_by_decade(ventures),
            top_by_views: summarize(aggregates::top_by_views(ventures, top_n)),
            top_by_reactions: summarize(aggregates::top_by_reactions(ventures, top_n)),
        }
    }
}

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;
