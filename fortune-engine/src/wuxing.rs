//! # 五行统计
//!
//! 将四柱八字归约为五行分布，并提供五行互补、五行偏枯等判断。

use crate::types::{DiZhi, ElementDistribution, SiZhu, TianGan, WuXing};

/// 五行偏枯阈值：单一五行达到该数量即视为偏重
pub const ELEMENT_BIAS_THRESHOLD: u8 = 3;

/// 五行互补阈值：一方缺失、另一方达到该数量即视为互补
pub const ELEMENT_COMPLEMENT_THRESHOLD: u8 = 2;

/// 天干五行
pub fn tiangan_wuxing(stem: TianGan) -> WuXing {
    stem.wuxing()
}

/// 地支五行
pub fn dizhi_wuxing(branch: DiZhi) -> WuXing {
    branch.wuxing()
}

impl ElementDistribution {
    /// 统计四柱八字的五行分布（总数恒为 8）
    pub fn from_sizhu(sizhu: &SiZhu) -> Self {
        let mut counts = [0u8; 5];
        for element in sizhu.wuxing_iter() {
            counts[element.index()] = counts[element.index()].saturating_add(1);
        }
        Self { counts }
    }

    /// 数量最少的五行
    ///
    /// 并列时按 木 火 土 金 水 顺序取第一个。
    pub fn weakest(&self) -> (WuXing, u8) {
        let mut weakest = (WuXing::Mu, self.count(WuXing::Mu));
        for (element, count) in self.iter() {
            if count < weakest.1 {
                weakest = (element, count);
            }
        }
        weakest
    }

    /// 是否含有某五行
    pub fn has(&self, element: WuXing) -> bool {
        self.count(element) > 0
    }

    /// 是否有五行偏重
    pub fn is_biased(&self) -> bool {
        self.counts.iter().any(|c| *c >= ELEMENT_BIAS_THRESHOLD)
    }
}

/// 五行分布
pub fn distribution(sizhu: &SiZhu) -> ElementDistribution {
    ElementDistribution::from_sizhu(sizhu)
}

/// 五行互补数：甲方缺失而乙方达到阈值的五行个数
pub fn complementary_count(d1: &ElementDistribution, d2: &ElementDistribution) -> u8 {
    WuXing::ALL
        .into_iter()
        .filter(|e| d1.count(*e) == 0 && d2.count(*e) >= ELEMENT_COMPLEMENT_THRESHOLD)
        .count() as u8
}

/// 双方互补数之和（对称）
pub fn mutual_complementary_count(d1: &ElementDistribution, d2: &ElementDistribution) -> u8 {
    complementary_count(d1, d2).saturating_add(complementary_count(d2, d1))
}

/// 双方在同一五行上同时偏重
pub fn has_element_bias(d1: &ElementDistribution, d2: &ElementDistribution) -> bool {
    WuXing::ALL
        .into_iter()
        .any(|e| d1.count(e) >= ELEMENT_BIAS_THRESHOLD && d2.count(e) >= ELEMENT_BIAS_THRESHOLD)
}
