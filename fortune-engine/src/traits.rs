//! # Trait 定义
//!
//! 引擎对外部协作方的接口。

use alloc::string::String;

use crate::types::{FortuneCategory, GanZhi, SiZhu};

/// 运势文本提供者 Trait
///
/// 由外部文本生成服务实现。返回 `None` 或空文本时，引擎使用内置文本。
pub trait FortuneTextProvider {
    /// 生成某一类运势文本
    fn fortune_text(profile: &SiZhu, today: GanZhi, category: FortuneCategory) -> Option<String>;
}

/// 不提供文本，全部使用内置文本
impl FortuneTextProvider for () {
    fn fortune_text(_profile: &SiZhu, _today: GanZhi, _category: FortuneCategory) -> Option<String> {
        None
    }
}
