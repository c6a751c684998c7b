#![cfg_attr(not(feature = "std"), no_std)]

//! # Fortune Engine (四柱运势引擎)
//!
//! ## 概述
//!
//! 本 crate 根据出生时间排出四柱，并在四柱之上计算：
//! - 合婚评分（综合分 + 沟通、情感、财运、健康分项）
//! - 相似度评分
//! - 相冲评分（挑选"最不合"的对象）
//! - 每日运势（评分、运势文本、幸运物）
//! - 候选排名（同分共享名次）
//!
//! ## 特点
//!
//! - ✅ 纯计算，无存储、无网络调用
//! - ✅ 所有评分函数都是全函数，结果钳制在 0-100
//! - ✅ no_std 兼容
//!
//! ## 模块
//!
//! ```text
//! relations      干支关系表（五合、六合、三合、六冲、怨嗔、相刑、贵人、驿马、空亡）
//! calendar       干支排盘（年、月、日、时柱）
//! wuxing         五行分布、互补与偏重
//! compatibility  合婚评分
//! similarity     相似度评分
//! conflict       相冲评分
//! daily          每日运势与幸运物
//! ranking        排名与匹配挑选
//! validation     出生信息校验
//! ```
//!
//! ## 权重
//!
//! | 评分 | 年柱 | 月柱 | 日柱 | 时柱 |
//! |------|------|------|------|------|
//! | 合婚 | 20% | 30% | 40% | 0% |
//! | 相似度 | 20% | 30% | 50% | 0% |
//!
//! 权重通过 [`Config`] 配置，自由函数使用默认权重。

extern crate alloc;

pub mod calendar;
pub mod compatibility;
pub mod conflict;
pub mod daily;
pub mod ranking;
pub mod relations;
pub mod similarity;
pub mod traits;
pub mod types;
pub mod validation;
pub mod wuxing;

#[cfg(test)]
mod mock;

use alloc::vec::Vec;
use core::marker::PhantomData;
use frame_support::{parameter_types, traits::Get};

pub use calendar::{day_pillar, four_pillars, hour_pillar, month_pillar, year_pillar};
pub use compatibility::{analyze_categories, calculate_compatibility, pillar_compatibility};
pub use conflict::calculate_conflict;
pub use daily::calculate_daily_fortune;
pub use ranking::{rank_by_compatibility, rank_by_similarity, rank_candidates, select_matches};
pub use similarity::calculate_similarity;
pub use traits::FortuneTextProvider;
pub use types::*;
pub use validation::BirthRecordError;
pub use wuxing::{complementary_count, has_element_bias};

/// 日志 target
pub(crate) const LOG_TARGET: &str = "fortune-engine";

/// 引擎配置
pub trait Config {
    /// 合婚权重
    type CompatibilityWeights: Get<PillarWeights>;

    /// 相似度权重
    type SimilarityWeights: Get<PillarWeights>;

    /// 运势文本提供者
    type TextProvider: FortuneTextProvider;

    /// 匹配与排名时最多考察的候选数（默认 100）
    type MaxCandidates: Get<u32>;
}

parameter_types! {
    pub DefaultCompatibilityWeights: PillarWeights = PillarWeights::compatibility();
    pub DefaultSimilarityWeights: PillarWeights = PillarWeights::similarity();
    pub const DefaultMaxCandidates: u32 = ranking::DEFAULT_MAX_CANDIDATES;
}

/// 默认配置：合婚 40/30/20、相似度 50/30/20、内置文本、100 个候选
pub struct DefaultConfig;

impl Config for DefaultConfig {
    type CompatibilityWeights = DefaultCompatibilityWeights;
    type SimilarityWeights = DefaultSimilarityWeights;
    type TextProvider = ();
    type MaxCandidates = DefaultMaxCandidates;
}

/// 按配置计算的引擎入口
pub struct Engine<T>(PhantomData<T>);

impl<T: Config> Engine<T> {
    /// 校验出生信息并排盘
    pub fn chart(record: &BirthRecord) -> Result<SiZhu, BirthRecordError> {
        record.to_sizhu()
    }

    /// 五行分布
    pub fn distribution(sizhu: &SiZhu) -> ElementDistribution {
        ElementDistribution::from_sizhu(sizhu)
    }

    pub fn compatibility(sizhu1: &SiZhu, sizhu2: &SiZhu) -> CompatibilityResult {
        compatibility::calculate_compatibility_with(sizhu1, sizhu2, &T::CompatibilityWeights::get())
    }

    /// 分项解读文本（沟通、情感、生活、注意）
    pub fn analyze(sizhu1: &SiZhu, sizhu2: &SiZhu) -> CategoryAnalysis {
        compatibility::analyze_categories(sizhu1, sizhu2)
    }

    pub fn similarity(sizhu1: &SiZhu, sizhu2: &SiZhu) -> Score {
        similarity::calculate_similarity_with(sizhu1, sizhu2, &T::SimilarityWeights::get())
    }

    pub fn conflict(sizhu1: &SiZhu, sizhu2: &SiZhu) -> Score {
        conflict::calculate_conflict(sizhu1, sizhu2)
    }

    /// 每日运势，文本优先取自 `T::TextProvider`
    pub fn daily_fortune(profile: &SiZhu, date: CivilDate) -> DailyPrediction {
        daily::calculate_daily_fortune_with::<T::TextProvider>(profile, date)
    }

    /// 今日运势（系统时钟，UTC）
    #[cfg(feature = "std")]
    pub fn today_fortune(profile: &SiZhu) -> DailyPrediction {
        Self::daily_fortune(profile, CivilDate::today_utc())
    }

    pub fn rank_by_similarity<Id: Ord + Clone>(
        profile: &SiZhu,
        candidates: &[(Id, SiZhu)],
        limit: usize,
    ) -> Vec<RankedItem<Id>> {
        let weights = T::SimilarityWeights::get();
        ranking::rank_by(candidates, T::MaxCandidates::get(), limit, |other| {
            similarity::calculate_similarity_with(profile, other, &weights)
        })
    }

    pub fn rank_by_compatibility<Id: Ord + Clone>(
        profile: &SiZhu,
        candidates: &[(Id, SiZhu)],
        limit: usize,
    ) -> Vec<RankedItem<Id>> {
        let weights = T::CompatibilityWeights::get();
        ranking::rank_by(candidates, T::MaxCandidates::get(), limit, |other| {
            compatibility::compatibility_score(profile, other, &weights)
        })
    }

    /// 挑选最相似、最合、最不合的对象
    pub fn select_matches<Id: Ord + Clone>(
        query_id: &Id,
        profile: &SiZhu,
        candidates: &[(Id, SiZhu)],
    ) -> MatchSelection<Id> {
        ranking::select_matches_with(
            query_id,
            profile,
            candidates,
            &T::CompatibilityWeights::get(),
            &T::SimilarityWeights::get(),
            T::MaxCandidates::get(),
        )
    }
}
