#[cfg(test)]
mod tests {
    use crate::domain::analytics::aggregates::*;
    use crate::domain::foundation::VentureId;
    use crate::domain::venture::{NewVenture, ReactionKind, Reactions, Venture};

    fn venture(id: &str, year: i32, views: u64, reactions: Reactions) -> Venture {
        let mut v = Venture::create(VentureId::new(id).unwrap(), NewVenture::new(id, id, year));
        v.views = views;
        v.reactions = reactions;
        v
    }

    fn hearts(n: u64) -> Reactions {
        Reactions {
            heart: n,
            ..Reactions::zeroed()
        }
    }

    fn ids(list: &[&Venture]) -> Vec<String> {
        list.iter().map(|v| v.id.to_string()).collect()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Totals and engagement
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn totals_over_empty_collection_are_zero() {
        assert_eq!(total_views(&[]), 0);
        assert_eq!(total_reactions(&[]), 0);
        assert_eq!(engagement_rate(&[]), 0.0);
    }

    #[test]
    fn totals_sum_every_venture() {
        let ventures = vec![
            venture("a", 1997, 10, hearts(3)),
            venture("b", 2005, 30, Reactions { sad: 2, thinking: 1, ..Reactions::zeroed() }),
        ];
        assert_eq!(total_views(&ventures), 40);
        assert_eq!(total_reactions(&ventures), 6);
    }

    #[test]
    fn engagement_rate_is_zero_without_views_even_with_reactions() {
        let ventures = vec![venture("a", 2020, 0, hearts(9))];
        assert_eq!(engagement_rate(&ventures), 0.0);
    }

    #[test]
    fn engagement_rate_is_reactions_per_hundred_views() {
        let ventures = vec![venture("a", 2020, 40, hearts(10)), venture("b", 2021, 60, hearts(5))];
        assert!((engagement_rate(&ventures) - 15.0).abs() < 1e-9);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Arg-max tie-breaks
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn most_viewed_prefers_first_on_tie() {
        let ventures = vec![
            venture("a", 2020, 5, hearts(0)),
            venture("b", 2020, 9, hearts(0)),
            venture("c", 2020, 9, hearts(0)),
        ];
        assert_eq!(most_viewed(&ventures).unwrap().id.as_str(), "b");
    }

    #[test]
    fn most_viewed_with_all_zero_is_first_venture() {
        let ventures = vec![venture("a", 2020, 0, hearts(0)), venture("b", 2020, 0, hearts(0))];
        assert_eq!(most_viewed(&ventures).unwrap().id.as_str(), "a");
    }

    #[test]
    fn most_reacted_prefers_first_on_tie() {
        let ventures = vec![
            venture("a", 2020, 0, hearts(4)),
            venture("b", 2020, 0, Reactions { laugh: 2, angry: 2, ..Reactions::zeroed() }),
        ];
        assert_eq!(most_reacted(&ventures).unwrap().id.as_str(), "a");
    }

    #[test]
    fn arg_max_over_empty_is_none() {
        assert!(most_viewed(&[]).is_none());
        assert!(most_reacted(&[]).is_none());
    }

    // ─────────────────────────────────────────────────────────────────────
    // Breakdown and decades
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn breakdown_lists_all_kinds_in_canonical_order() {
        let breakdown = reaction_breakdown(&[]);
        let kinds: Vec<ReactionKind> = breakdown.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, ReactionKind::ALL.to_vec());
        assert!(breakdown.iter().all(|s| s.count == 0 && s.percentage == 0.0));
    }

    #[test]
    fn breakdown_carries_display_label_and_emoji() {
        let breakdown = reaction_breakdown(&[]);
        assert_eq!(breakdown[0].label, "Inspired");
        assert_eq!(breakdown[0].emoji, "\u{2764}\u{fe0f}");
        assert_eq!(breakdown[5].label, "Thought-Provoking");
        assert_eq!(breakdown[5].emoji, "\u{1f914}");
    }

    #[test]
    fn breakdown_percentages_share_total() {
        let ventures = vec![
            venture("a", 2020, 1, Reactions { heart: 3, sad: 1, ..Reactions::zeroed() }),
            venture("b", 2020, 1, hearts(4)),
        ];
        let breakdown = reaction_breakdown(&ventures);
        assert_eq!(breakdown[0].count, 7);
        assert!((breakdown[0].percentage - 87.5).abs() < 1e-9);
        assert!((breakdown[1].percentage - 12.5).abs() < 1e-9);
        let sum: f64 = breakdown.iter().map(|s| s.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn decade_of_floors_toward_negative_infinity() {
        assert_eq!(decade_of(1997), 1990);
        assert_eq!(decade_of(2000), 2000);
        assert_eq!(decade_of(2009), 2000);
        assert_eq!(decade_of(-5), -10);
    }

    #[test]
    fn decade_of_handles_extreme_years() {
        assert_eq!(decade_of(i32::MIN), -2_147_483_650);
        assert_eq!(decade_of(i32::MAX), 2_147_483_640);
    }

    #[test]
    fn ventures_by_decade_accepts_extreme_years() {
        let ventures = vec![
            venture("a", i32::MIN, 0, hearts(0)),
            venture("b", i32::MAX, 0, hearts(0)),
        ];
        let buckets = ventures_by_decade(&ventures);
        assert_eq!(buckets.get(&-2_147_483_650), Some(&1));
        assert_eq!(buckets.get(&2_147_483_640), Some(&1));
    }

    #[test]
    fn ventures_by_decade_groups_launch_years() {
        let ventures = vec![
            venture("a", 1997, 0, hearts(0)),
            venture("b", 2005, 0, hearts(0)),
            venture("c", 2008, 0, hearts(0)),
            venture("d", 2019, 0, hearts(0)),
        ];
        let buckets = ventures_by_decade(&ventures);
        assert_eq!(buckets.get(&1990), Some(&1));
        assert_eq!(buckets.get(&2000), Some(&2));
        assert_eq!(buckets.get(&2010), Some(&1));
        assert_eq!(buckets.keys().copied().collect::<Vec<_>>(), vec![1990, 2000, 2010]);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Rankings
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn top_by_views_is_stable_and_truncated() {
        let ventures = vec![
            venture("a", 2020, 3, hearts(0)),
            venture("b", 2020, 7, hearts(0)),
            venture("c", 2020, 3, hearts(0)),
            venture("d", 2020, 1, hearts(0)),
        ];
        assert_eq!(ids(&top_by_views(&ventures, 3)), vec!["b", "a", "c"]);
        assert_eq!(top_by_views(&ventures, 10).len(), 4);
        assert!(top_by_views(&ventures, 0).is_empty());
    }

    #[test]
    fn top_by_reactions_ranks_by_reaction_sum() {
        let ventures = vec![
            venture("a", 2020, 100, hearts(1)),
            venture("b", 2020, 0, Reactions { sad: 2, laugh: 2, ..Reactions::zeroed() }),
            venture("c", 2020, 0, hearts(4)),
        ];
        assert_eq!(ids(&top_by_reactions(&ventures, 5)), vec!["b", "c", "a"]);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Overview figures
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn average_views_rounds_to_nearest() {
        let ventures = vec![venture("a", 2020, 1, hearts(0)), venture("b", 2020, 2, hearts(0))];
        assert_eq!(average_views(&ventures), 2);
        assert_eq!(average_views(&[]), 0);
    }

    #[test]
    fn year_span_is_inclusive() {
        let ventures = vec![venture("a", 1997, 0, hearts(0)), venture("b", 2019, 0, hearts(0))];
        assert_eq!(year_span(&ventures), 23);
        assert_eq!(year_span(&ventures[..1]), 1);
        assert_eq!(year_span(&[]), 0);
    }

    #[test]
    fn year_span_covers_full_i32_range() {
        let ventures = vec![
            venture("a", i32::MIN, 0, hearts(0)),
            venture("b", i32::MAX, 0, hearts(0)),
        ];
        assert_eq!(year_span(&ventures), 1 << 32);
    }
}
