//! # 合婚评分
//!
//! 逐柱比较两人的天干地支，按柱位加权得出综合分，并给出沟通、情感、
//! 财运、健康四项分项评分。
//!
//! ## 单柱评分
//!
//! | 条件 | 分值 |
//! |------|------|
//! | 基础分 | 50 |
//! | 天干五合 | +20 |
//! | 地支六合（否则三合） | +20 |
//! | 天干五行相生（任一方向） | +15 |
//! | 天干相冲 | -10 |
//! | 地支六冲 | -15 |
//! | 地支相刑 | -15 |
//! | 地支怨嗔 | -10 |
//!
//! 日柱天干五合且地支六合时，直接判为满分。

use crate::relations::{
    is_dizhi_chong, is_dizhi_liuhe, is_dizhi_sanhe, is_dizhi_xing, is_dizhi_yuanchen,
    is_tiangan_chong, is_tiangan_he, is_wuxing_sheng,
};
use crate::types::{
    CategoryAnalysis, CategoryScores, CompatibilityGrade, CompatibilityResult,
    ElementDistribution, GanZhi, PillarWeights, Score, SiZhu, WuXing,
};
use crate::wuxing::{complementary_count, has_element_bias, mutual_complementary_count};
use crate::LOG_TARGET;

/// 分项基础分
const CATEGORY_BASE: i16 = 50;

/// 单柱合婚评分（0-100）
pub fn pillar_compatibility(gz1: GanZhi, gz2: GanZhi) -> u8 {
    let mut score: i16 = 50;

    if is_tiangan_he(gz1.gan, gz2.gan) {
        score += 20;
    }

    if is_dizhi_liuhe(gz1.zhi, gz2.zhi) {
        score += 20;
    } else if is_dizhi_sanhe(gz1.zhi, gz2.zhi) {
        score += 20;
    }

    let (e1, e2) = (gz1.gan.wuxing(), gz2.gan.wuxing());
    if is_wuxing_sheng(e1, e2) || is_wuxing_sheng(e2, e1) {
        score += 15;
    }

    if is_tiangan_chong(gz1.gan, gz2.gan) {
        score -= 10;
    }
    if is_dizhi_chong(gz1.zhi, gz2.zhi) {
        score -= 15;
    }
    if is_dizhi_xing(gz1.zhi, gz2.zhi) {
        score -= 15;
    }
    if is_dizhi_yuanchen(gz1.zhi, gz2.zhi) {
        score -= 10;
    }

    score.clamp(0, 100) as u8
}

/// 日柱天干五合且地支六合
pub fn is_perfect_day_match(sizhu1: &SiZhu, sizhu2: &SiZhu) -> bool {
    is_tiangan_he(sizhu1.day_gan(), sizhu2.day_gan()) && is_dizhi_liuhe(sizhu1.day_zhi(), sizhu2.day_zhi())
}

/// 综合合婚评分
pub fn compatibility_score(sizhu1: &SiZhu, sizhu2: &SiZhu, weights: &PillarWeights) -> Score {
    if is_perfect_day_match(sizhu1, sizhu2) {
        log::debug!(
            target: LOG_TARGET,
            "perfect day pillar match {} / {}",
            sizhu1.day,
            sizhu2.day,
        );
        return Score::MAX;
    }

    weights.weighted(
        pillar_compatibility(sizhu1.year, sizhu2.year),
        pillar_compatibility(sizhu1.month, sizhu2.month),
        pillar_compatibility(sizhu1.day, sizhu2.day),
        pillar_compatibility(sizhu1.hour, sizhu2.hour),
    )
}

/// 分项评分
pub fn category_scores(sizhu1: &SiZhu, sizhu2: &SiZhu) -> CategoryScores {
    let d1 = ElementDistribution::from_sizhu(sizhu1);
    let d2 = ElementDistribution::from_sizhu(sizhu2);
    let clamp = |score: i16| score.clamp(0, 100) as u8;

    // 沟通：日干
    let mut communication = CATEGORY_BASE;
    if is_tiangan_he(sizhu1.day_gan(), sizhu2.day_gan()) {
        communication += 30;
    }
    if sizhu1.day_gan().wuxing() == sizhu2.day_gan().wuxing() {
        communication += 10;
    }

    // 情感：月支
    let mut emotion = CATEGORY_BASE;
    if is_dizhi_liuhe(sizhu1.month.zhi, sizhu2.month.zhi) {
        emotion += 30;
    }
    if mutual_complementary_count(&d1, &d2) >= 2 {
        emotion += 10;
    }

    // 财运：木
    let mut wealth = CATEGORY_BASE;
    match (d1.has(WuXing::Mu), d2.has(WuXing::Mu)) {
        (true, true) => wealth += 25,
        (true, false) | (false, true) => wealth += 15,
        (false, false) => {},
    }

    // 健康：日支
    let mut health = CATEGORY_BASE;
    let (z1, z2) = (sizhu1.day_zhi(), sizhu2.day_zhi());
    if is_dizhi_sanhe(z1, z2) {
        health += 30;
    }
    if !is_dizhi_chong(z1, z2) && !is_dizhi_xing(z1, z2) {
        health += 10;
    }

    CategoryScores {
        communication: clamp(communication),
        emotion: clamp(emotion),
        wealth: clamp(wealth),
        health: clamp(health),
    }
}

/// 计算合婚结果（默认权重）
pub fn calculate_compatibility(sizhu1: &SiZhu, sizhu2: &SiZhu) -> CompatibilityResult {
    calculate_compatibility_with(sizhu1, sizhu2, &PillarWeights::compatibility())
}

/// 计算合婚结果
pub fn calculate_compatibility_with(
    sizhu1: &SiZhu,
    sizhu2: &SiZhu,
    weights: &PillarWeights,
) -> CompatibilityResult {
    let score = compatibility_score(sizhu1, sizhu2, weights);

    CompatibilityResult {
        score,
        distribution: ElementDistribution::from_sizhu(sizhu1),
        categories: category_scores(sizhu1, sizhu2),
        grade: CompatibilityGrade::from_score(score),
    }
}

impl CompatibilityGrade {
    /// 按综合分定级
    pub fn from_score(score: Score) -> Self {
        match score.points() {
            80..=100 => CompatibilityGrade::Excellent,
            60..=79 => CompatibilityGrade::Good,
            0..=39 => CompatibilityGrade::Poor,
            _ => CompatibilityGrade::Normal,
        }
    }

    /// 等级评语
    pub fn summary(&self) -> &'static str {
        match self {
            CompatibilityGrade::Excellent => "두 사람은 매우 좋은 궁합을 가지고 있습니다. 서로를 잘 이해하고 보완하는 관계가 될 것입니다.",
            CompatibilityGrade::Good => "두 사람은 좋은 궁합을 가지고 있습니다. 서로 협력하며 발전할 수 있는 관계입니다.",
            CompatibilityGrade::Normal => "두 사람은 평범한 궁합을 가지고 있습니다. 서로의 차이를 존중하며 관계를 발전시켜 나가세요.",
            CompatibilityGrade::Poor => "두 사람은 서로 다른 성향을 가지고 있어 이해가 필요합니다. 인내심과 소통이 중요합니다.",
        }
    }
}

/// 分项解读
pub fn analyze_categories(sizhu1: &SiZhu, sizhu2: &SiZhu) -> CategoryAnalysis {
    let d1 = ElementDistribution::from_sizhu(sizhu1);
    let d2 = ElementDistribution::from_sizhu(sizhu2);
    let (g1, g2) = (sizhu1.day_gan(), sizhu2.day_gan());
    let (z1, z2) = (sizhu1.day_zhi(), sizhu2.day_zhi());

    let communication = if is_tiangan_he(g1, g2) {
        "말하지 않아도 통하는 텔레파시가 있어요."
    } else if is_tiangan_chong(g1, g2) {
        "가치관이 달라 논쟁이 될 수 있지만, 새로운 시각을 줘요."
    } else if g1.wuxing() == g2.wuxing() {
        "친구처럼 편안하게 대화가 흘러가요."
    } else {
        "서로 다른 관점을 나누며 대화가 이어져요."
    };

    // 文本只看单向互补，评分用双向
    let emotion = if complementary_count(&d1, &d2) >= 2 {
        "서로의 부족한 점을 감싸주는 안정감을 느껴요."
    } else if has_element_bias(&d1, &d2) {
        "성격이 너무 비슷해서 오히려 부딪힐 때가 있어요."
    } else {
        "서로의 감정을 잘 이해하고 공감할 수 있어요."
    };

    let lifestyle = if is_dizhi_liuhe(z1, z2) {
        "함께 무언가를 도모하면 손발이 척척 맞아요."
    } else if is_dizhi_sanhe(z1, z2) {
        "목표와 가치관이 잘 맞아 협력이 잘 돼요."
    } else if is_dizhi_chong(z1, z2) {
        "활동 반경이나 생활 패턴이 달라서 조율이 필요해요."
    } else {
        "서로의 생활 방식을 존중하며 조화롭게 지낼 수 있어요."
    };

    let caution = if is_dizhi_yuanchen(z1, z2) {
        "사소한 오해가 감정 싸움으로 번지지 않게 배려가 필요해요."
    } else if is_dizhi_chong(z1, z2) {
        "의견 차이가 있을 때 바로 해결하지 않으면 오래가요."
    } else {
        "특별히 주의할 점은 없으나, 서로 예의를 지키는 게 중요해요."
    };

    CategoryAnalysis { communication, emotion, lifestyle, caution }
}
