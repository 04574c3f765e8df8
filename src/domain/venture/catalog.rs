//! Read-side orderings of the venture collection.

use super::record::Venture;
use crate::domain::foundation::VentureId;

/// Admin listing order: newest launch first. Ventures launched in the same
/// year keep their collection order.
pub fn by_year_descending(ventures: &[Venture]) -> Vec<&Venture> {
    let mut sorted: Vec<&Venture> = ventures.iter().collect();
    sorted.sort_by(|a, b| b.year_launched.cmp(&a.year_launched));
    sorted
}

/// Public roadmap order: oldest launch first, stable within a year.
pub fn timeline(ventures: &[Venture]) -> Vec<&Venture> {
    let mut sorted: Vec<&Venture> = ventures.iter().collect();
    sorted.sort_by_key(|v| v.year_launched);
    sorted
}

pub fn find<'a>(ventures: &'a [Venture], id: &VentureId) -> Option<&'a Venture> {
    ventures.iter().find(|v| &v.id == id)
}

/// First id that appears more than once, if any.
pub fn first_duplicate_id(ventures: &[Venture]) -> Option<&VentureId> {
    let mut seen = std::collections::HashSet::with_capacity(ventures.len());
    ventures.iter().map(|v| &v.id).find(|id| !seen.insert(*id))
}
