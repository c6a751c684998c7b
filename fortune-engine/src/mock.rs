//! # 测试模拟环境
//!
//! 为 `Engine<T>` 测试提供配置与模拟文本服务

use crate::{Config, FortuneCategory, FortuneTextProvider, GanZhi, PillarWeights, SiZhu};
use alloc::string::String;
use frame_support::parameter_types;
use sp_runtime::Percent;

/// 模拟文本服务返回的财运文本
pub const MOCK_WEALTH_TEXT: &str = "mock wealth";

/// Mock 文本服务：财运返回固定文本，桃花返回空文本，其余不提供
pub struct MockTextProvider;

impl FortuneTextProvider for MockTextProvider {
    fn fortune_text(_profile: &SiZhu, _today: GanZhi, category: FortuneCategory) -> Option<String> {
        match category {
            FortuneCategory::Wealth => Some(String::from(MOCK_WEALTH_TEXT)),
            FortuneCategory::Love => Some(String::new()),
            _ => None,
        }
    }
}

parameter_types! {
    /// 合婚权重启用时柱：日 40%、月 30%、年 20%、时 10%
    pub TestCompatibilityWeights: PillarWeights = PillarWeights {
        hour: Percent::from_percent(10),
        ..PillarWeights::compatibility()
    };
    pub TestSimilarityWeights: PillarWeights = PillarWeights::similarity();
    pub const TestMaxCandidates: u32 = 2;
}

pub struct Test;

impl Config for Test {
    type CompatibilityWeights = TestCompatibilityWeights;
    type SimilarityWeights = TestSimilarityWeights;
    type TextProvider = MockTextProvider;
    type MaxCandidates = TestMaxCandidates;
}
