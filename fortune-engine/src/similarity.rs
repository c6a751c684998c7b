//! # 相似度评分
//!
//! 比较两份八字"有多像"：同干同支得满分，同五行得半分。

use crate::types::{GanZhi, PillarWeights, Score, SiZhu};

/// 单柱相似度（0-100）
pub fn pillar_similarity(gz1: GanZhi, gz2: GanZhi) -> u8 {
    let mut score = 0u8;

    if gz1.gan == gz2.gan {
        score += 50;
    } else if gz1.gan.wuxing() == gz2.gan.wuxing() {
        score += 25;
    }

    if gz1.zhi == gz2.zhi {
        score += 50;
    } else if gz1.zhi.wuxing() == gz2.zhi.wuxing() {
        score += 25;
    }

    score
}

/// 相似度（默认权重：日 50%、月 30%、年 20%）
pub fn calculate_similarity(sizhu1: &SiZhu, sizhu2: &SiZhu) -> Score {
    calculate_similarity_with(sizhu1, sizhu2, &PillarWeights::similarity())
}

pub fn calculate_similarity_with(sizhu1: &SiZhu, sizhu2: &SiZhu, weights: &PillarWeights) -> Score {
    weights.weighted(
        pillar_similarity(sizhu1.year, sizhu2.year),
        pillar_similarity(sizhu1.month, sizhu2.month),
        pillar_similarity(sizhu1.day, sizhu2.day),
        pillar_similarity(sizhu1.hour, sizhu2.hour),
    )
}
