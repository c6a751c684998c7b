//! # 干支关系表
//!
//! 天干五合、相冲，地支六合、三合、六冲、怨嗔、相刑，
//! 以及天乙贵人、驿马、空亡等神煞查询。
//!
//! 所有查询对任意干支均有定义，查不到即视为"无关系"，不会报错。
//! 除天乙贵人（干→支）与空亡（独立集合）外，其余关系均为对称关系。

use crate::types::{DiZhi, TianGan, WuXing};

/// 天干五合对照表
/// 甲己合、乙庚合、丙辛合、丁壬合、戊癸合
const TIANGAN_HE_PAIRS: [(u8, u8); 5] = [
    (0, 5), // 甲己合
    (1, 6), // 乙庚合
    (2, 7), // 丙辛合
    (3, 8), // 丁壬合
    (4, 9), // 戊癸合
];

/// 天干相冲对照表
/// 甲庚冲、乙辛冲、丙壬冲、丁癸冲、戊己冲
const TIANGAN_CHONG_PAIRS: [(u8, u8); 5] = [
    (0, 6), // 甲庚冲
    (1, 7), // 乙辛冲
    (2, 8), // 丙壬冲
    (3, 9), // 丁癸冲
    (4, 5), // 戊己冲
];

/// 地支六合对照表
/// 子丑合、寅亥合、卯戌合、辰酉合、巳申合、午未合
const DIZHI_LIUHE_PAIRS: [(u8, u8); 6] = [
    (0, 1),  // 子丑合
    (2, 11), // 寅亥合
    (3, 10), // 卯戌合
    (4, 9),  // 辰酉合
    (5, 8),  // 巳申合
    (6, 7),  // 午未合
];

/// 地支三合局
/// 寅午戌火局、亥卯未木局、巳酉丑金局、申子辰水局
const DIZHI_SANHE_GROUPS: [[u8; 3]; 4] = [
    [2, 6, 10], // 寅午戌
    [11, 3, 7], // 亥卯未
    [5, 9, 1],  // 巳酉丑
    [8, 0, 4],  // 申子辰
];

/// 地支六冲对照表
/// 子午冲、丑未冲、寅申冲、卯酉冲、辰戌冲、巳亥冲
const DIZHI_LIUCHONG_PAIRS: [(u8, u8); 6] = [
    (0, 6),  // 子午冲
    (1, 7),  // 丑未冲
    (2, 8),  // 寅申冲
    (3, 9),  // 卯酉冲
    (4, 10), // 辰戌冲
    (5, 11), // 巳亥冲
];

/// 地支怨嗔对照表
/// 子未、丑午、寅酉、卯申、辰亥、巳戌
const DIZHI_YUANCHEN_PAIRS: [(u8, u8); 6] = [
    (0, 7),  // 子未
    (1, 6),  // 丑午
    (2, 9),  // 寅酉
    (3, 8),  // 卯申
    (4, 11), // 辰亥
    (5, 10), // 巳戌
];

/// 地支相刑对照表
/// 子卯无礼之刑、寅巳申恃势之刑、丑戌未无恩之刑、辰亥自刑
const DIZHI_XING_PAIRS: [(u8, u8); 7] = [
    (0, 3),   // 子卯
    (2, 5),   // 寅巳
    (5, 8),   // 巳申
    (1, 10),  // 丑戌
    (10, 7),  // 戌未
    (4, 4),   // 辰辰自刑
    (11, 11), // 亥亥自刑
];

/// 天乙贵人对照表（日干 → 贵人地支）
/// 甲戊庚牛羊、乙己鼠猴乡、丙丁猪鸡位、壬癸兔蛇藏、六辛逢马虎
const TIANYI_GUIREN: [[u8; 2]; 10] = [
    [1, 7],  // 甲：丑未
    [0, 8],  // 乙：子申
    [11, 9], // 丙：亥酉
    [11, 9], // 丁：亥酉
    [1, 7],  // 戊：丑未
    [0, 8],  // 己：子申
    [1, 7],  // 庚：丑未
    [2, 6],  // 辛：寅午
    [3, 5],  // 壬：卯巳
    [3, 5],  // 癸：卯巳
];

/// 驿马对照表
/// 寅申、巳亥
const YIMA_PAIRS: [(u8, u8); 2] = [
    (2, 8),  // 寅申
    (5, 11), // 巳亥
];

/// 空亡地支
/// 戌亥
const KONGWANG: [u8; 2] = [10, 11];

/// 对称查表
fn contains_pair(pairs: &[(u8, u8)], x: u8, y: u8) -> bool {
    pairs.iter().any(|(a, b)| (x == *a && y == *b) || (x == *b && y == *a))
}

/// 检查天干是否相合
pub fn is_tiangan_he(stem1: TianGan, stem2: TianGan) -> bool {
    contains_pair(&TIANGAN_HE_PAIRS, stem1.0, stem2.0)
}

/// 检查天干是否相冲
pub fn is_tiangan_chong(stem1: TianGan, stem2: TianGan) -> bool {
    contains_pair(&TIANGAN_CHONG_PAIRS, stem1.0, stem2.0)
}

/// 检查地支是否六合
pub fn is_dizhi_liuhe(branch1: DiZhi, branch2: DiZhi) -> bool {
    contains_pair(&DIZHI_LIUHE_PAIRS, branch1.0, branch2.0)
}

/// 检查地支是否三合（同局且不同支）
pub fn is_dizhi_sanhe(branch1: DiZhi, branch2: DiZhi) -> bool {
    branch1 != branch2
        && DIZHI_SANHE_GROUPS
            .iter()
            .any(|group| group.contains(&branch1.0) && group.contains(&branch2.0))
}

/// 检查地支是否六冲
pub fn is_dizhi_chong(branch1: DiZhi, branch2: DiZhi) -> bool {
    contains_pair(&DIZHI_LIUCHONG_PAIRS, branch1.0, branch2.0)
}

/// 检查地支是否怨嗔
pub fn is_dizhi_yuanchen(branch1: DiZhi, branch2: DiZhi) -> bool {
    contains_pair(&DIZHI_YUANCHEN_PAIRS, branch1.0, branch2.0)
}

/// 检查地支是否相刑（含自刑）
pub fn is_dizhi_xing(branch1: DiZhi, branch2: DiZhi) -> bool {
    contains_pair(&DIZHI_XING_PAIRS, branch1.0, branch2.0)
}

/// 检查地支对日干是否为天乙贵人
///
/// 方向固定为 干 → 支，不可交换。
pub fn is_tianyi_guiren(stem: TianGan, branch: DiZhi) -> bool {
    TIANYI_GUIREN
        .get(stem.0 as usize)
        .map_or(false, |branches| branches.contains(&branch.0))
}

/// 检查两支是否成驿马
pub fn is_yima(branch1: DiZhi, branch2: DiZhi) -> bool {
    contains_pair(&YIMA_PAIRS, branch1.0, branch2.0)
}

/// 检查地支是否落空亡
pub fn is_kongwang(branch: DiZhi) -> bool {
    KONGWANG.contains(&branch.0)
}

/// 检查五行是否相生
pub fn is_wuxing_sheng(from: WuXing, to: WuXing) -> bool {
    from.generates() == to
}

#[cfg(test)]
mod tests {
    use super::*;

    const JIA: TianGan = TianGan(0);
    const YI: TianGan = TianGan(1);
    const WU_GAN: TianGan = TianGan(4);
    const JI: TianGan = TianGan(5);
    const GENG: TianGan = TianGan(6);
    const XIN: TianGan = TianGan(7);

    const ZI: DiZhi = DiZhi(0);
    const CHOU: DiZhi = DiZhi(1);
    const YIN: DiZhi = DiZhi(2);
    const MAO: DiZhi = DiZhi(3);
    const CHEN: DiZhi = DiZhi(4);
    const SI: DiZhi = DiZhi(5);
    const WU: DiZhi = DiZhi(6);
    const WEI: DiZhi = DiZhi(7);
    const SHEN: DiZhi = DiZhi(8);
    const XU: DiZhi = DiZhi(10);
    const HAI: DiZhi = DiZhi(11);

    fn partners(branch: DiZhi, relation: fn(DiZhi, DiZhi) -> bool) -> usize {
        DiZhi::all().filter(|other| relation(branch, *other)).count()
    }

    #[test]
    fn test_tiangan_he() {
        assert!(is_tiangan_he(JIA, JI));
        assert!(is_tiangan_he(JI, JIA));
        assert!(!is_tiangan_he(JIA, YI));
    }

    #[test]
    fn test_tiangan_chong() {
        assert!(is_tiangan_chong(JIA, GENG));
        assert!(is_tiangan_chong(WU_GAN, JI));
        assert!(!is_tiangan_chong(YI, GENG));
    }

    #[test]
    fn every_stem_has_exactly_one_partner() {
        for stem in TianGan::all() {
            assert_eq!(TianGan::all().filter(|o| is_tiangan_he(stem, *o)).count(), 1);
            assert_eq!(TianGan::all().filter(|o| is_tiangan_chong(stem, *o)).count(), 1);
        }
    }

    #[test]
    fn test_dizhi_liuhe_and_sanhe() {
        assert!(is_dizhi_liuhe(ZI, CHOU));
        assert!(!is_dizhi_liuhe(ZI, YIN));
        assert!(is_dizhi_sanhe(YIN, WU));
        assert!(is_dizhi_sanhe(XU, YIN));
        assert!(!is_dizhi_sanhe(YIN, YIN));
        assert!(!is_dizhi_sanhe(YIN, MAO));

        for branch in DiZhi::all() {
            assert_eq!(partners(branch, is_dizhi_liuhe), 1);
            assert_eq!(partners(branch, is_dizhi_sanhe), 2);
        }
    }

    #[test]
    fn test_dizhi_chong_yuanchen_xing() {
        assert!(is_dizhi_chong(ZI, WU));
        assert!(!is_dizhi_chong(ZI, CHOU));
        assert!(is_dizhi_yuanchen(ZI, WEI));
        assert!(is_dizhi_yuanchen(SI, XU));
        assert!(is_dizhi_xing(ZI, MAO));
        assert!(is_dizhi_xing(SHEN, SI));
        assert!(is_dizhi_xing(CHEN, CHEN));
        assert!(is_dizhi_xing(HAI, HAI));
        assert!(!is_dizhi_xing(WU, WU));

        for branch in DiZhi::all() {
            assert!(partners(branch, is_dizhi_xing) <= 2);
        }
        let self_punishing = DiZhi::all().filter(|b| is_dizhi_xing(*b, *b)).count();
        assert_eq!(self_punishing, 2);
    }

    #[test]
    fn symmetric_relations_are_symmetric() {
        let relations: [fn(DiZhi, DiZhi) -> bool; 6] = [
            is_dizhi_liuhe,
            is_dizhi_sanhe,
            is_dizhi_chong,
            is_dizhi_yuanchen,
            is_dizhi_xing,
            is_yima,
        ];
        for relation in relations.iter() {
            for a in DiZhi::all() {
                for b in DiZhi::all() {
                    assert_eq!(relation(a, b), relation(b, a), "{} {}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_tianyi_guiren() {
        assert!(is_tianyi_guiren(JIA, CHOU));
        assert!(is_tianyi_guiren(JIA, WEI));
        assert!(is_tianyi_guiren(XIN, YIN));
        assert!(!is_tianyi_guiren(JIA, ZI));
        for stem in TianGan::all() {
            let count = DiZhi::all().filter(|b| is_tianyi_guiren(stem, *b)).count();
            assert!((1..=2).contains(&count));
        }
    }

    #[test]
    fn test_yima_and_kongwang() {
        assert!(is_yima(YIN, SHEN));
        assert!(is_yima(HAI, SI));
        assert!(!is_yima(YIN, SI));
        assert!(is_kongwang(XU));
        assert!(is_kongwang(HAI));
        assert!(!is_kongwang(ZI));
    }

    #[test]
    fn test_wuxing_sheng() {
        assert!(is_wuxing_sheng(WuXing::Mu, WuXing::Huo));
        assert!(is_wuxing_sheng(WuXing::Shui, WuXing::Mu));
        assert!(!is_wuxing_sheng(WuXing::Huo, WuXing::Mu));
        assert!(!is_wuxing_sheng(WuXing::Mu, WuXing::Tu));
    }
}
