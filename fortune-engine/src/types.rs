//! # 四柱运势引擎 - 核心类型定义
//!
//! 定义天干、地支、五行、干支、四柱以及各评分结果的数据结构。
//!
//! ## 索引约定
//!
//! - 天干: 甲(0) 乙(1) 丙(2) 丁(3) 戊(4) 己(5) 庚(6) 辛(7) 壬(8) 癸(9)
//! - 地支: 子(0) 丑(1) 寅(2) 卯(3) 辰(4) 巳(5) 午(6) 未(7) 申(8) 酉(9) 戌(10) 亥(11)
//! - 五行: 木(0) 火(1) 土(2) 金(3) 水(4)

use alloc::string::String;
use codec::{Decode, DecodeWithMemTracking, Encode, Input, MaxEncodedLen};
use frame_support::{traits::ConstU32, BoundedVec};
use scale_info::TypeInfo;
use sp_runtime::Percent;
use sp_std::fmt;

// ============================================================================
// 天干
// ============================================================================

/// 天干名称
pub const TIANGAN_NAMES: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// 天干（0-9）
///
/// SCALE 解码与反序列化都会校验范围。
#[derive(
    Clone, Copy, Encode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, PartialOrd, Ord, Hash, Debug,
    Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "u8"))]
pub struct TianGan(pub(crate) u8);

impl TianGan {
    pub const JIA: Self = Self(0);
    pub const YI: Self = Self(1);
    pub const BING: Self = Self(2);
    pub const DING: Self = Self(3);
    pub const WU: Self = Self(4);
    pub const JI: Self = Self(5);
    pub const GENG: Self = Self(6);
    pub const XIN: Self = Self(7);
    pub const REN: Self = Self(8);
    pub const GUI: Self = Self(9);

    /// 从索引创建，超出 0-9 返回 None
    pub const fn new(index: u8) -> Option<Self> {
        if index < 10 {
            Some(Self(index))
        } else {
            None
        }
    }

    /// 按十干循环取模创建（负数同样有效）
    pub const fn wrapping(index: i64) -> Self {
        Self(index.rem_euclid(10) as u8)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// 天干五行：甲乙木、丙丁火、戊己土、庚辛金、壬癸水
    pub const fn wuxing(self) -> WuXing {
        WuXing::ALL[(self.0 as usize % 10) / 2]
    }

    /// 阴阳：偶数为阳干
    pub const fn is_yang(self) -> bool {
        self.0 % 2 == 0
    }

    pub fn name(self) -> &'static str {
        TIANGAN_NAMES[self.0 as usize % 10]
    }

    /// 全部十干，按固定顺序
    pub fn all() -> impl Iterator<Item = TianGan> {
        (0..10u8).map(TianGan)
    }
}

impl TryFrom<u8> for TianGan {
    type Error = &'static str;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index).ok_or("TianGan index out of range")
    }
}

impl Decode for TianGan {
    fn decode<I: Input>(input: &mut I) -> Result<Self, codec::Error> {
        Ok(Self::try_from(u8::decode(input)?)?)
    }
}

impl fmt::Display for TianGan {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// 地支
// ============================================================================

/// 地支名称
pub const DIZHI_NAMES: [&str; 12] = ["子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥"];

/// 地支五行：子水 丑土 寅木 卯木 辰土 巳火 午火 未土 申金 酉金 戌土 亥水
const DIZHI_WUXING: [WuXing; 12] = [
    WuXing::Shui,
    WuXing::Tu,
    WuXing::Mu,
    WuXing::Mu,
    WuXing::Tu,
    WuXing::Huo,
    WuXing::Huo,
    WuXing::Tu,
    WuXing::Jin,
    WuXing::Jin,
    WuXing::Tu,
    WuXing::Shui,
];

/// 地支（0-11）
///
/// SCALE 解码与反序列化都会校验范围。
#[derive(
    Clone, Copy, Encode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, PartialOrd, Ord, Hash, Debug,
    Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "u8"))]
pub struct DiZhi(pub(crate) u8);

impl DiZhi {
    pub const ZI: Self = Self(0);
    pub const CHOU: Self = Self(1);
    pub const YIN: Self = Self(2);
    pub const MAO: Self = Self(3);
    pub const CHEN: Self = Self(4);
    pub const SI: Self = Self(5);
    pub const WU: Self = Self(6);
    pub const WEI: Self = Self(7);
    pub const SHEN: Self = Self(8);
    pub const YOU: Self = Self(9);
    pub const XU: Self = Self(10);
    pub const HAI: Self = Self(11);

    /// 从索引创建，超出 0-11 返回 None
    pub const fn new(index: u8) -> Option<Self> {
        if index < 12 {
            Some(Self(index))
        } else {
            None
        }
    }

    /// 按十二支循环取模创建（负数同样有效）
    pub const fn wrapping(index: i64) -> Self {
        Self(index.rem_euclid(12) as u8)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn wuxing(self) -> WuXing {
        DIZHI_WUXING[self.0 as usize % 12]
    }

    pub fn name(self) -> &'static str {
        DIZHI_NAMES[self.0 as usize % 12]
    }

    /// 全部十二支，按固定顺序
    pub fn all() -> impl Iterator<Item = DiZhi> {
        (0..12u8).map(DiZhi)
    }
}

impl TryFrom<u8> for DiZhi {
    type Error = &'static str;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index).ok_or("DiZhi index out of range")
    }
}

impl Decode for DiZhi {
    fn decode<I: Input>(input: &mut I) -> Result<Self, codec::Error> {
        Ok(Self::try_from(u8::decode(input)?)?)
    }
}

impl fmt::Display for DiZhi {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// 五行
// ============================================================================

/// 五行
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, PartialOrd, Ord, Hash,
    Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum WuXing {
    /// 木
    #[default]
    Mu = 0,
    /// 火
    Huo = 1,
    /// 土
    Tu = 2,
    /// 金
    Jin = 3,
    /// 水
    Shui = 4,
}

impl WuXing {
    /// 固定遍历顺序：木 火 土 金 水
    pub const ALL: [WuXing; 5] = [WuXing::Mu, WuXing::Huo, WuXing::Tu, WuXing::Jin, WuXing::Shui];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// 我生者（子五行）：木生火、火生土、土生金、金生水、水生木
    pub const fn generates(self) -> WuXing {
        WuXing::ALL[(self as usize + 1) % 5]
    }

    pub fn name(self) -> &'static str {
        match self {
            WuXing::Mu => "木",
            WuXing::Huo => "火",
            WuXing::Tu => "土",
            WuXing::Jin => "金",
            WuXing::Shui => "水",
        }
    }
}

impl fmt::Display for WuXing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// 干支与四柱
// ============================================================================

/// 干支（一柱）
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Hash, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GanZhi {
    pub gan: TianGan,
    pub zhi: DiZhi,
}

impl GanZhi {
    pub const fn new(gan: TianGan, zhi: DiZhi) -> Self {
        Self { gan, zhi }
    }

    /// 从六十甲子序号创建（0=甲子 … 59=癸亥）
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 60 {
            Some(Self::from_cycle(index as i64))
        } else {
            None
        }
    }

    /// 按六十甲子循环取模创建
    pub const fn from_cycle(index: i64) -> Self {
        let idx = index.rem_euclid(60);
        Self {
            gan: TianGan((idx % 10) as u8),
            zhi: DiZhi((idx % 12) as u8),
        }
    }

    /// 六十甲子序号
    ///
    /// 干支阴阳不同（如甲丑）时不在六十甲子内，返回 None。
    pub const fn index(self) -> Option<u8> {
        let gan = self.gan.0 as i64;
        let zhi = self.zhi.0 as i64;
        if gan % 2 != zhi % 2 {
            return None;
        }
        Some((6 * gan - 5 * zhi).rem_euclid(60) as u8)
    }
}

impl fmt::Display for GanZhi {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.gan, self.zhi)
    }
}

/// 柱位
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ZhuPosition {
    Year = 0,
    Month = 1,
    Day = 2,
    Hour = 3,
}

/// 四柱（年、月、日、时）
///
/// 由出生时间一次性排出，之后不再修改。
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Hash, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SiZhu {
    pub year: GanZhi,
    pub month: GanZhi,
    pub day: GanZhi,
    pub hour: GanZhi,
}

impl SiZhu {
    pub const fn new(year: GanZhi, month: GanZhi, day: GanZhi, hour: GanZhi) -> Self {
        Self { year, month, day, hour }
    }

    pub const fn pillar(&self, position: ZhuPosition) -> GanZhi {
        match position {
            ZhuPosition::Year => self.year,
            ZhuPosition::Month => self.month,
            ZhuPosition::Day => self.day,
            ZhuPosition::Hour => self.hour,
        }
    }

    /// 年、月、日、时顺序
    pub const fn pillars(&self) -> [GanZhi; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// 日主（日干）
    pub const fn day_gan(&self) -> TianGan {
        self.day.gan
    }

    /// 日支
    pub const fn day_zhi(&self) -> DiZhi {
        self.day.zhi
    }

    /// 八字全部八个字的五行
    pub fn wuxing_iter(&self) -> impl Iterator<Item = WuXing> {
        self.pillars()
            .into_iter()
            .flat_map(|gz| [gz.gan.wuxing(), gz.zhi.wuxing()])
    }
}

impl fmt::Display for SiZhu {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

// ============================================================================
// 五行分布
// ============================================================================

/// 五行分布（按 木 火 土 金 水 顺序计数）
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementDistribution {
    pub counts: [u8; 5],
}

impl ElementDistribution {
    pub const fn count(&self, element: WuXing) -> u8 {
        self.counts[element as usize]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().map(|c| *c as u32).sum()
    }

    /// 按固定顺序遍历 (五行, 数量)
    pub fn iter(&self) -> impl Iterator<Item = (WuXing, u8)> + '_ {
        WuXing::ALL.into_iter().map(move |e| (e, self.count(e)))
    }
}

// ============================================================================
// 评分
// ============================================================================

/// 评分（定点数，单位为 0.1 分，范围 0.0 - 100.0）
///
/// 所有权重均为 10% 的整数倍，加权结果在十分位上是精确的。
/// SCALE 解码与反序列化拒绝超过 1000 的值。
#[derive(
    Clone, Copy, Encode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, PartialOrd, Ord, Hash, Debug,
    Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "u16"))]
pub struct Score(u16);

impl Score {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(1000);

    /// 整数分（超过 100 按 100 计）
    pub const fn from_points(points: u8) -> Self {
        if points > 100 {
            Self::MAX
        } else {
            Self(points as u16 * 10)
        }
    }

    /// 十分位分值，钳制到 [0, 1000]
    pub const fn from_tenths(tenths: i64) -> Self {
        if tenths < 0 {
            Self::ZERO
        } else if tenths > 1000 {
            Self::MAX
        } else {
            Self(tenths as u16)
        }
    }

    pub const fn tenths(self) -> u16 {
        self.0
    }

    /// 整数部分
    pub const fn points(self) -> u8 {
        (self.0 / 10) as u8
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 10.0
    }
}

impl TryFrom<u16> for Score {
    type Error = &'static str;

    fn try_from(tenths: u16) -> Result<Self, Self::Error> {
        if tenths > Self::MAX.0 {
            return Err("Score above 100.0");
        }
        Ok(Self(tenths))
    }
}

impl Decode for Score {
    fn decode<I: Input>(input: &mut I) -> Result<Self, codec::Error> {
        Ok(Self::try_from(u16::decode(input)?)?)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

/// 四柱权重
///
/// 时柱权重为扩展算法预留，默认配置为 0。
#[derive(Clone, Copy, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
pub struct PillarWeights {
    pub year: Percent,
    pub month: Percent,
    pub day: Percent,
    pub hour: Percent,
}

impl PillarWeights {
    /// 合婚默认权重：日 40%、月 30%、年 20%
    pub fn compatibility() -> Self {
        Self {
            year: Percent::from_percent(20),
            month: Percent::from_percent(30),
            day: Percent::from_percent(40),
            hour: Percent::from_percent(0),
        }
    }

    /// 相似度默认权重：日 50%、月 30%、年 20%
    pub fn similarity() -> Self {
        Self {
            year: Percent::from_percent(20),
            month: Percent::from_percent(30),
            day: Percent::from_percent(50),
            hour: Percent::from_percent(0),
        }
    }

    /// 加权求和，每柱输入为 0-100 整数分
    pub fn weighted(&self, year: u8, month: u8, day: u8, hour: u8) -> Score {
        let part = |points: u8, weight: Percent| points as i64 * weight.deconstruct() as i64;
        let hundredths = part(year, self.year)
            + part(month, self.month)
            + part(day, self.day)
            + part(hour, self.hour);
        Score::from_tenths(hundredths / 10)
    }
}

impl Default for PillarWeights {
    fn default() -> Self {
        Self::compatibility()
    }
}

// ============================================================================
// 合婚结果
// ============================================================================

/// 分项评分（0-100）
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryScores {
    /// 沟通
    pub communication: u8,
    /// 情感
    pub emotion: u8,
    /// 财运
    pub wealth: u8,
    /// 健康
    pub health: u8,
}

/// 合婚等级
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CompatibilityGrade {
    /// 上佳（80 分及以上）
    Excellent = 0,
    /// 良好（60-79 分）
    Good = 1,
    /// 一般（40-59 分）
    #[default]
    Normal = 2,
    /// 欠佳（40 分以下）
    Poor = 3,
}

/// 合婚结果
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct CompatibilityResult {
    /// 综合评分
    pub score: Score,
    /// 甲方五行分布
    pub distribution: ElementDistribution,
    /// 分项评分
    pub categories: CategoryScores,
    /// 等级
    pub grade: CompatibilityGrade,
}

/// 分项解读文本
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct CategoryAnalysis {
    pub communication: &'static str,
    pub emotion: &'static str,
    pub lifestyle: &'static str,
    pub caution: &'static str,
}

// ============================================================================
// 每日运势
// ============================================================================

/// 运势类别
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum FortuneCategory {
    /// 财运
    Wealth = 0,
    /// 桃花
    Love = 1,
    /// 健康
    Health = 2,
    /// 总运
    Total = 3,
}

impl FortuneCategory {
    pub const ALL: [FortuneCategory; 4] = [
        FortuneCategory::Total,
        FortuneCategory::Wealth,
        FortuneCategory::Love,
        FortuneCategory::Health,
    ];
}

/// 四类运势文本
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FortuneTexts {
    pub wealth: String,
    pub love: String,
    pub health: String,
    pub total: String,
}

impl FortuneTexts {
    pub fn get(&self, category: FortuneCategory) -> &str {
        match category {
            FortuneCategory::Wealth => &self.wealth,
            FortuneCategory::Love => &self.love,
            FortuneCategory::Health => &self.health,
            FortuneCategory::Total => &self.total,
        }
    }
}

/// 幸运色
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct LuckyColor {
    pub name: &'static str,
    pub hex: &'static str,
}

/// 幸运物
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct LuckyItem {
    pub element: WuXing,
    pub color: LuckyColor,
    pub numbers: [u8; 2],
}

/// 当日神煞提示（不计入评分）
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct DaySigns {
    /// 日支与当日地支成驿马
    pub flying_horse: bool,
    /// 当日地支落空亡
    pub void_day: bool,
}

/// 每日运势
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct DailyPrediction {
    /// 当日日柱
    pub today: GanZhi,
    pub score: Score,
    pub texts: FortuneTexts,
    pub lucky: LuckyItem,
    pub signs: DaySigns,
}

// ============================================================================
// 排名
// ============================================================================

/// 带分数的候选
#[derive(
    Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredCandidate<Id> {
    pub id: Id,
    pub score: Score,
}

/// 排名结果
#[derive(
    Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedItem<Id> {
    pub id: Id,
    pub score: Score,
    /// 从 1 开始，并列共享名次
    pub rank: u32,
}

/// 匹配挑选结果
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSelection<Id> {
    /// 最相似
    pub similar: Option<ScoredCandidate<Id>>,
    /// 最合
    pub best_match: Option<ScoredCandidate<Id>>,
    /// 最不合
    pub worst_match: Option<ScoredCandidate<Id>>,
}

impl<Id> Default for MatchSelection<Id> {
    fn default() -> Self {
        Self { similar: None, best_match: None, worst_match: None }
    }
}

// ============================================================================
// 日期与出生信息
// ============================================================================

/// 公历日期（UTC，无时刻）
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, PartialOrd, Ord, Hash,
    Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct CivilDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl CivilDate {
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

/// 出生地最大字节数
pub const MAX_BIRTH_PLACE_LEN: u32 = 64;

/// 出生信息
#[derive(Clone, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default)]
pub struct BirthRecord {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    /// 农历标记（目前不参与排盘）
    pub is_lunar: bool,
    /// 出生时辰不详
    pub unknown_time: bool,
    pub birth_place: BoundedVec<u8, ConstU32<MAX_BIRTH_PLACE_LEN>>,
}
