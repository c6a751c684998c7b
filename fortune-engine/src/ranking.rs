//! # 排名与匹配挑选
//!
//! 排序规则：分数降序，同分按 id 升序；名次采用竞赛排名（1, 1, 3）。

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::compatibility::compatibility_score;
use crate::conflict::calculate_conflict;
use crate::similarity::calculate_similarity_with;
use crate::types::{MatchSelection, PillarWeights, RankedItem, Score, ScoredCandidate, SiZhu};

/// 默认候选窗口
pub const DEFAULT_MAX_CANDIDATES: u32 = 100;

/// 分数降序、id 升序
fn by_score_desc<Id: Ord>(a: &ScoredCandidate<Id>, b: &ScoredCandidate<Id>) -> Ordering {
    b.score.cmp(&a.score).then_with(|| a.id.cmp(&b.id))
}

/// 排序并分配名次
pub fn rank_candidates<Id: Ord>(mut items: Vec<ScoredCandidate<Id>>) -> Vec<RankedItem<Id>> {
    items.sort_by(by_score_desc);

    let mut ranked: Vec<RankedItem<Id>> = Vec::with_capacity(items.len());
    for (position, item) in items.into_iter().enumerate() {
        let rank = match ranked.last() {
            Some(prev) if prev.score == item.score => prev.rank,
            _ => position as u32 + 1,
        };
        ranked.push(RankedItem { id: item.id, score: item.score, rank });
    }
    ranked
}

/// 对候选逐个打分后排名，只看前 `max_candidates` 个候选，结果截取前 `limit` 个
pub fn rank_by<Id, F>(
    candidates: &[(Id, SiZhu)],
    max_candidates: u32,
    limit: usize,
    score_fn: F,
) -> Vec<RankedItem<Id>>
where
    Id: Ord + Clone,
    F: Fn(&SiZhu) -> Score,
{
    let scored = candidates
        .iter()
        .take(max_candidates as usize)
        .map(|(id, sizhu)| ScoredCandidate { id: id.clone(), score: score_fn(sizhu) })
        .collect();

    let mut ranked = rank_candidates(scored);
    ranked.truncate(limit);
    ranked
}

/// 按相似度排名（默认权重）
pub fn rank_by_similarity<Id: Ord + Clone>(
    profile: &SiZhu,
    candidates: &[(Id, SiZhu)],
    limit: usize,
) -> Vec<RankedItem<Id>> {
    let weights = PillarWeights::similarity();
    rank_by(candidates, DEFAULT_MAX_CANDIDATES, limit, |other| {
        calculate_similarity_with(profile, other, &weights)
    })
}

/// 按合婚分排名（默认权重）
pub fn rank_by_compatibility<Id: Ord + Clone>(
    profile: &SiZhu,
    candidates: &[(Id, SiZhu)],
    limit: usize,
) -> Vec<RankedItem<Id>> {
    let weights = PillarWeights::compatibility();
    rank_by(candidates, DEFAULT_MAX_CANDIDATES, limit, |other| {
        compatibility_score(profile, other, &weights)
    })
}

/// 保留更优者，同分取 id 较小者
fn keep_best<Id: Ord>(slot: &mut Option<ScoredCandidate<Id>>, candidate: ScoredCandidate<Id>, higher_is_better: bool) {
    let replace = match slot {
        None => true,
        Some(current) => {
            let ordering = if higher_is_better {
                candidate.score.cmp(&current.score)
            } else {
                current.score.cmp(&candidate.score)
            };
            ordering == Ordering::Greater || (ordering == Ordering::Equal && candidate.id < current.id)
        },
    };
    if replace {
        *slot = Some(candidate);
    }
}

/// 挑选最相似、最合、最不合的对象
///
/// 跳过与 `query_id` 相同的候选，其余候选只看前 `max_candidates` 个。
pub fn select_matches_with<Id: Ord + Clone>(
    query_id: &Id,
    profile: &SiZhu,
    candidates: &[(Id, SiZhu)],
    compatibility_weights: &PillarWeights,
    similarity_weights: &PillarWeights,
    max_candidates: u32,
) -> MatchSelection<Id> {
    let mut selection = MatchSelection::default();

    for (id, other) in candidates
        .iter()
        .filter(|(id, _)| id != query_id)
        .take(max_candidates as usize)
    {
        keep_best(
            &mut selection.similar,
            ScoredCandidate { id: id.clone(), score: calculate_similarity_with(profile, other, similarity_weights) },
            true,
        );
        keep_best(
            &mut selection.best_match,
            ScoredCandidate { id: id.clone(), score: compatibility_score(profile, other, compatibility_weights) },
            true,
        );
        keep_best(
            &mut selection.worst_match,
            ScoredCandidate { id: id.clone(), score: calculate_conflict(profile, other) },
            false,
        );
    }

    selection
}

/// 挑选匹配对象（默认配置）
pub fn select_matches<Id: Ord + Clone>(
    query_id: &Id,
    profile: &SiZhu,
    candidates: &[(Id, SiZhu)],
) -> MatchSelection<Id> {
    select_matches_with(
        query_id,
        profile,
        candidates,
        &PillarWeights::compatibility(),
        &PillarWeights::similarity(),
        DEFAULT_MAX_CANDIDATES,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::four_pillars;
    use crate::similarity::calculate_similarity;
    use alloc::vec;

    fn scored(id: &'static str, points: u8) -> ScoredCandidate<&'static str> {
        ScoredCandidate { id, score: Score::from_points(points) }
    }

    #[test]
    fn ties_share_rank_and_order_by_id() {
        let ranked = rank_candidates(vec![scored("b", 90), scored("a", 90), scored("c", 70)]);
        let ids: Vec<_> = ranked.iter().map(|r| r.id).collect();
        let ranks: Vec<_> = ranked.iter().map(|r| r.rank).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(ranks, vec![1, 1, 3]);
    }

    #[test]
    fn test_rank_candidates_edge_cases() {
        assert!(rank_candidates::<u32>(Vec::new()).is_empty());

        let ranked = rank_candidates(vec![scored("x", 50), scored("y", 50), scored("z", 50)]);
        assert!(ranked.iter().all(|r| r.rank == 1));

        let ranked = rank_candidates(vec![scored("a", 10), scored("b", 20), scored("c", 20), scored("d", 30)]);
        let ranks: Vec<_> = ranked.iter().map(|r| (r.id, r.rank)).collect();
        assert_eq!(ranks, vec![("d", 1), ("b", 2), ("c", 2), ("a", 4)]);
    }

    #[test]
    fn test_rank_by_similarity_with_limit() {
        let me = four_pillars(1990, 5, 5, 10);
        let candidates = vec![
            (3u32, four_pillars(1971, 8, 19, 3)),
            (1u32, me),
            (2u32, four_pillars(1990, 5, 6, 10)),
        ];
        let ranked = rank_by_similarity(&me, &candidates, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].id, 1);
        assert_eq!(ranked[0].score, Score::MAX);
        assert_eq!(ranked[1].score, calculate_similarity(&me, &candidates[2].1).max(calculate_similarity(&me, &candidates[0].1)));
    }

    #[test]
    fn rank_by_respects_candidate_window() {
        let me = four_pillars(1990, 5, 5, 10);
        let candidates: Vec<(u32, SiZhu)> = (0..10).map(|i| (i, four_pillars(1980 + i as i32, 1, 1, 0))).collect();
        let ranked = rank_by(&candidates, 3, 10, |other| calculate_similarity(&me, other));
        assert_eq!(ranked.len(), 3);
        assert!(ranked.iter().all(|r| r.id < 3));
    }

    #[test]
    fn test_select_matches() {
        let me = four_pillars(1992, 3, 3, 12);
        let candidates = vec![
            (1u32, me),
            (2u32, me),
            (3u32, four_pillars(1985, 10, 20, 4)),
            (4u32, four_pillars(1999, 7, 1, 18)),
        ];
        let selection = select_matches(&1, &me, &candidates);

        // 跳过自己；与自己相同的 2 号最相似
        let similar = selection.similar.expect("has candidates");
        assert_eq!(similar.id, 2);
        assert_eq!(similar.score, Score::MAX);

        let best = selection.best_match.expect("has candidates");
        let worst = selection.worst_match.expect("has candidates");
        for (id, other) in candidates.iter().skip(1) {
            let weights = PillarWeights::compatibility();
            assert!(compatibility_score(&me, other, &weights) <= best.score);
            assert!(calculate_conflict(&me, other) >= worst.score);
            assert_ne!(*id, 1);
        }
    }

    #[test]
    fn select_matches_breaks_ties_by_id() {
        let me = four_pillars(1992, 3, 3, 12);
        let other = four_pillars(1985, 10, 20, 4);
        let candidates = vec![(9u32, other), (4u32, other), (7u32, other)];
        let selection = select_matches(&0, &me, &candidates);
        assert_eq!(selection.similar.map(|c| c.id), Some(4));
        assert_eq!(selection.best_match.map(|c| c.id), Some(4));
        assert_eq!(selection.worst_match.map(|c| c.id), Some(4));
    }

    #[test]
    fn empty_candidates_select_nothing() {
        let me = four_pillars(1992, 3, 3, 12);
        let selection = select_matches(&1u32, &me, &[(1u32, me)]);
        assert_eq!(selection, MatchSelection::default());
    }
}
