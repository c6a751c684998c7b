//! # 相冲评分
//!
//! 用于挑选"最不合"的对象，分数越低冲突越大。

use crate::relations::{is_dizhi_chong, is_dizhi_yuanchen};
use crate::types::{ElementDistribution, Score, SiZhu};
use crate::wuxing::has_element_bias;

/// 相冲评分（0-100，越低越冲）
///
/// 基础 50 分；日支六冲 -30，日支怨嗔 -25，双方同一五行偏重 -15。
pub fn calculate_conflict(sizhu1: &SiZhu, sizhu2: &SiZhu) -> Score {
    let mut score: i16 = 50;

    let (z1, z2) = (sizhu1.day_zhi(), sizhu2.day_zhi());
    if is_dizhi_chong(z1, z2) {
        score -= 30;
    }
    if is_dizhi_yuanchen(z1, z2) {
        score -= 25;
    }

    let d1 = ElementDistribution::from_sizhu(sizhu1);
    let d2 = ElementDistribution::from_sizhu(sizhu2);
    if has_element_bias(&d1, &d2) {
        score -= 15;
    }

    Score::from_points(score.clamp(0, 100) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DiZhi, GanZhi, TianGan};

    fn profile(day: GanZhi, filler: GanZhi) -> SiZhu {
        SiZhu::new(filler, filler, day, filler)
    }

    #[test]
    fn neutral_pair_scores_fifty() {
        // 甲子 / 乙丑 分布无共同偏重，日支子丑不冲
        let a = profile(GanZhi::new(TianGan::JIA, DiZhi::ZI), GanZhi::new(TianGan::BING, DiZhi::WU));
        let b = profile(GanZhi::new(TianGan::YI, DiZhi::CHOU), GanZhi::new(TianGan::GENG, DiZhi::SHEN));
        assert_eq!(calculate_conflict(&a, &b), Score::from_points(50));
    }

    #[test]
    fn test_chong_and_bias() {
        // 双方均 丙午 偏火，日支子午冲：50 - 30 - 15 = 5
        let filler = GanZhi::new(TianGan::BING, DiZhi::WU);
        let a = profile(GanZhi::new(TianGan::JIA, DiZhi::ZI), filler);
        let b = profile(GanZhi::new(TianGan::GENG, DiZhi::WU), filler);
        assert_eq!(calculate_conflict(&a, &b), Score::from_points(5));
    }

    #[test]
    fn test_yuanchen() {
        // 子未怨嗔
        let a = profile(GanZhi::new(TianGan::JIA, DiZhi::ZI), GanZhi::new(TianGan::BING, DiZhi::WU));
        let b = profile(GanZhi::new(TianGan::XIN, DiZhi::WEI), GanZhi::new(TianGan::GENG, DiZhi::SHEN));
        assert_eq!(calculate_conflict(&a, &b), Score::from_points(25));
        assert_eq!(calculate_conflict(&b, &a), Score::from_points(25));
    }
}
