//! # 每日运势
//!
//! 以用户四柱与当日日柱推算当日运势评分、四类运势文本和幸运物。
//!
//! ## 评分
//!
//! | 条件 | 分值 |
//! |------|------|
//! | 基础分 | 70 |
//! | 日支与当日地支六合 | +20 |
//! | 当日地支五行为日干所生 | +15 |
//! | 当日地支为日干天乙贵人 | +10 |
//! | 日支与当日地支六冲 | -20 |
//! | 日支与当日地支相刑 | -15 |

use alloc::string::String;

use crate::calendar::date_pillar;
use crate::relations::{is_dizhi_chong, is_dizhi_liuhe, is_dizhi_xing, is_kongwang, is_tianyi_guiren, is_yima};
use crate::traits::FortuneTextProvider;
use crate::types::{
    CivilDate, DailyPrediction, DaySigns, DiZhi, ElementDistribution, FortuneCategory, FortuneTexts,
    GanZhi, LuckyColor, LuckyItem, Score, SiZhu, WuXing,
};
use crate::LOG_TARGET;

// ============================================================================
// 文本表
// ============================================================================

/// 总运文本（按用户日柱，仅甲子至癸酉）
const TOTAL_TEXTS: [&str; 10] = [
    "오늘은 새로운 시작에 좋은 날입니다. 자신감을 가지고 도전해보세요.",
    "인내심이 필요한 하루입니다. 서두르지 말고 차근차근 진행하세요.",
    "활동적인 하루가 예상됩니다. 에너지를 잘 활용하세요.",
    "창의적인 아이디어가 떠오를 수 있는 날입니다.",
    "안정적인 하루입니다. 기존 일을 마무리하는 데 좋습니다.",
    "변화를 준비하는 날입니다. 새로운 기회를 주시하세요.",
    "의사소통이 중요한 하루입니다. 타인과의 협력이 도움이 됩니다.",
    "세심한 주의가 필요한 날입니다. 작은 실수를 조심하세요.",
    "유연성이 필요한 하루입니다. 상황에 맞게 대응하세요.",
    "깊이 있는 사고가 필요한 날입니다. 중요한 결정은 신중하게 하세요.",
];

/// 财运文本（按当日天干五行）
const WEALTH_TEXTS: [&str; 5] = [
    "새로운 수입원을 찾기 좋은 날입니다. 작은 투자가 씨앗이 될 수 있어요.",
    "지출이 늘기 쉬운 날입니다. 충동구매를 조심하세요.",
    "재물이 차곡차곡 쌓이는 날입니다. 저축을 시작해보세요.",
    "금전 거래에 유리한 날입니다. 미뤄둔 정산을 마무리하세요.",
    "돈의 흐름이 활발한 날입니다. 들어온 만큼 나가지 않게 관리하세요.",
];

/// 桃花文本（按当日地支，丑辰未戌无）
const LOVE_TEXTS: [Option<&str>; 12] = [
    Some("조용한 대화 속에서 마음이 가까워지는 날입니다."),
    None,
    Some("먼저 다가가면 좋은 인연이 생길 수 있어요."),
    Some("설레는 만남이 기대되는 날입니다. 밝은 표정을 유지하세요."),
    None,
    Some("감정 표현이 솔직해지는 날입니다. 진심이 잘 전해져요."),
    Some("열정이 넘치는 하루입니다. 상대의 속도도 배려해주세요."),
    None,
    Some("새로운 모임에서 뜻밖의 인연을 만날 수 있어요."),
    Some("매력이 돋보이는 날입니다. 자신감을 가지세요."),
    None,
    Some("오래된 인연에게서 반가운 연락이 올 수 있어요."),
];

/// 健康文本（按用户日干）
const HEALTH_TEXTS: [&str; 10] = [
    "스트레칭으로 몸을 풀어주면 활력이 돌아와요.",
    "목과 어깨가 뭉치기 쉬우니 자세에 신경 쓰세요.",
    "과로하지 말고 충분한 수분을 섭취하세요.",
    "눈의 피로에 주의하고 일찍 잠자리에 드세요.",
    "규칙적인 식사가 컨디션 유지에 도움이 됩니다.",
    "소화에 부담 없는 음식을 챙겨 드세요.",
    "호흡기 관리에 신경 쓰고 가벼운 산책을 해보세요.",
    "피부가 예민해지기 쉬우니 보습을 챙기세요.",
    "몸을 따뜻하게 하고 찬 음식은 줄이세요.",
    "충분한 휴식으로 쌓인 피로를 풀어주세요.",
];

/// 幸运色与幸运数字（按 木 火 土 金 水）
const LUCKY_TABLE: [(LuckyColor, [u8; 2]); 5] = [
    (LuckyColor { name: "초록", hex: "#4CAF50" }, [3, 8]),
    (LuckyColor { name: "레드", hex: "#F44336" }, [2, 7]),
    (LuckyColor { name: "옐로우", hex: "#FFC107" }, [0, 5]),
    (LuckyColor { name: "화이트", hex: "#FFFFFF" }, [4, 9]),
    (LuckyColor { name: "블루", hex: "#2196F3" }, [1, 6]),
];

/// 各类运势的通用文本
pub fn fallback_text(category: FortuneCategory) -> &'static str {
    match category {
        FortuneCategory::Wealth => "오늘은 재물운이 안정적인 하루입니다. 계획적인 소비가 도움이 될 거예요.",
        FortuneCategory::Love => "인연운이 평범한 날입니다. 자연스러운 만남을 기대해보세요.",
        FortuneCategory::Health => "건강운이 양호한 하루입니다. 무리하지 말고 적당한 휴식이 필요해요.",
        FortuneCategory::Total => "오늘은 평범한 하루입니다. 긍정적인 마음가짐으로 하루를 보내세요.",
    }
}

/// 查表文本，表中无对应项返回 None
pub fn table_text(profile: &SiZhu, today: GanZhi, category: FortuneCategory) -> Option<&'static str> {
    match category {
        FortuneCategory::Wealth => WEALTH_TEXTS.get(today.gan.wuxing().index()).copied(),
        FortuneCategory::Love => LOVE_TEXTS.get(today.zhi.index() as usize).copied().flatten(),
        FortuneCategory::Health => HEALTH_TEXTS.get(profile.day_gan().index() as usize).copied(),
        FortuneCategory::Total => profile
            .day
            .index()
            .and_then(|index| TOTAL_TEXTS.get(index as usize))
            .copied(),
    }
}

/// 单类运势文本：外部文本 → 查表文本 → 通用文本
pub fn fortune_text<P: FortuneTextProvider>(
    profile: &SiZhu,
    today: GanZhi,
    category: FortuneCategory,
) -> String {
    if let Some(text) = P::fortune_text(profile, today, category).filter(|t| !t.is_empty()) {
        return text;
    }

    match table_text(profile, today, category) {
        Some(text) => String::from(text),
        None => {
            log::debug!(
                target: LOG_TARGET,
                "no {:?} text for day {} / today {}, using fallback",
                category,
                profile.day,
                today,
            );
            String::from(fallback_text(category))
        },
    }
}

/// 四类运势文本
pub fn fortune_texts<P: FortuneTextProvider>(profile: &SiZhu, today: GanZhi) -> FortuneTexts {
    FortuneTexts {
        wealth: fortune_text::<P>(profile, today, FortuneCategory::Wealth),
        love: fortune_text::<P>(profile, today, FortuneCategory::Love),
        health: fortune_text::<P>(profile, today, FortuneCategory::Health),
        total: fortune_text::<P>(profile, today, FortuneCategory::Total),
    }
}

// ============================================================================
// 评分
// ============================================================================

/// 当日运势评分
pub fn daily_score(profile: &SiZhu, today: GanZhi) -> Score {
    let mut score: i16 = 70;
    let day_gan = profile.day_gan();
    let day_zhi = profile.day_zhi();

    if is_dizhi_liuhe(day_zhi, today.zhi) {
        score += 20;
    }
    if today.zhi.wuxing() == day_gan.wuxing().generates() {
        score += 15;
    }
    if is_tianyi_guiren(day_gan, today.zhi) {
        score += 10;
    }
    if is_dizhi_chong(day_zhi, today.zhi) {
        score -= 20;
    }
    if is_dizhi_xing(day_zhi, today.zhi) {
        score -= 15;
    }

    Score::from_points(score.clamp(0, 100) as u8)
}

/// 当日神煞
pub fn day_signs(profile: &SiZhu, today: GanZhi) -> DaySigns {
    DaySigns {
        flying_horse: is_yima(profile.day_zhi(), today.zhi),
        void_day: is_kongwang(today.zhi),
    }
}

// ============================================================================
// 幸运物
// ============================================================================

/// 月令滋养地支：冬月取火，夏月取水，其余月份无
pub fn nourishing_branch(month: u8) -> Option<DiZhi> {
    match month {
        11 => Some(DiZhi::SI),
        12 | 1 => Some(DiZhi::WU),
        5 | 7 => Some(DiZhi::ZI),
        6 => Some(DiZhi::HAI),
        _ => None,
    }
}

/// 幸运五行
///
/// 先取八字中最少的五行（并列按 木 火 土 金 水），再依次应用：
/// 月令滋养五行（更少时）、日干所生五行（总是）、
/// 最少数为 0 时的日干所生五行。
pub fn lucky_element(profile: &SiZhu, date: CivilDate) -> WuXing {
    let distribution = ElementDistribution::from_sizhu(profile);
    let (mut lucky, min_count) = distribution.weakest();
    log::debug!(target: LOG_TARGET, "weakest element {} ({})", lucky, min_count);

    if let Some(branch) = nourishing_branch(date.month) {
        let element = branch.wuxing();
        if distribution.count(element) < min_count {
            log::debug!(target: LOG_TARGET, "lucky element {} -> {} (month {})", lucky, element, date.month);
            lucky = element;
        }
    }

    // 日干所生五行总是覆盖前一步，最少数为 0 时同样取它
    let child = profile.day_gan().wuxing().generates();
    if lucky != child {
        log::debug!(
            target: LOG_TARGET,
            "lucky element {} -> {} (day stem {}, min count {})",
            lucky,
            child,
            profile.day_gan(),
            min_count,
        );
    }

    child
}

/// 五行对应的幸运物
pub fn lucky_item(element: WuXing) -> LuckyItem {
    let (color, numbers) = LUCKY_TABLE[element.index()];
    LuckyItem { element, color, numbers }
}

// ============================================================================
// 汇总
// ============================================================================

/// 每日运势（内置文本）
pub fn calculate_daily_fortune(profile: &SiZhu, date: CivilDate) -> DailyPrediction {
    calculate_daily_fortune_with::<()>(profile, date)
}

/// 每日运势
pub fn calculate_daily_fortune_with<P: FortuneTextProvider>(
    profile: &SiZhu,
    date: CivilDate,
) -> DailyPrediction {
    let today = date_pillar(date);

    DailyPrediction {
        today,
        score: daily_score(profile, today),
        texts: fortune_texts::<P>(profile, today),
        lucky: lucky_item(lucky_element(profile, date)),
        signs: day_signs(profile, today),
    }
}
