//! # 干支排盘
//!
//! 根据公历年月日时排出年柱、月柱、日柱、时柱。
//!
//! ## 算法
//!
//! - 年柱: `(年 - 4) mod 60`
//! - 月柱: 月支 `(月 + 1) mod 12`，月干 `(年干 × 2 + 月支) mod 10`
//! - 日柱: 自 1900-01-01 起的整日数 `(天数 + 9) mod 60`
//! - 时柱: 时支 `((时 + 1) / 2) mod 12`，时干 `(日干 × 2 + 时支) mod 10`
//!
//! 排盘不做范围校验，超出范围的输入仍会得到确定的（但无意义的）结果，
//! 校验由调用方负责，见 [`crate::validation`]。

use crate::types::{CivilDate, DiZhi, GanZhi, SiZhu, TianGan};

/// 日柱起算日 1900-01-01 距 1970-01-01 的天数
const DAYS_1900_TO_1970: i64 = 25_567;

/// 日柱序号偏移
const DAY_CYCLE_OFFSET: i64 = 9;

/// 公历日期转为距 1970-01-01 的天数（前推格里历）
///
/// 月份超出 1-12 时按年进位，日期超出当月天数时顺延。
pub fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let year = year + (month - 1).div_euclid(12);
    let month = (month - 1).rem_euclid(12) + 1;

    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y.rem_euclid(400);
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// 距 1970-01-01 的天数转为公历日期
pub fn civil_from_days(days: i64) -> CivilDate {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };

    CivilDate::new(year as i32, month as u8, day as u8)
}

/// 自 1900-01-01 起的整日数
pub fn days_since_1900(year: i32, month: u32, day: u32) -> i64 {
    days_from_civil(year as i64, month as i64, day as i64) + DAYS_1900_TO_1970
}

/// 年柱
pub fn year_pillar(year: i32) -> GanZhi {
    GanZhi::from_cycle(year as i64 - 4)
}

/// 月柱
pub fn month_pillar(year: i32, month: u32) -> GanZhi {
    let year_gan = year_pillar(year).gan;
    let zhi = DiZhi::wrapping(month as i64 + 1);
    let gan = TianGan::wrapping(year_gan.index() as i64 * 2 + zhi.index() as i64);
    GanZhi::new(gan, zhi)
}

/// 日柱
pub fn day_pillar(year: i32, month: u32, day: u32) -> GanZhi {
    GanZhi::from_cycle(days_since_1900(year, month, day) + DAY_CYCLE_OFFSET)
}

/// 时柱
///
/// 每两小时一个时辰，23 点起为子时。
pub fn hour_pillar(day_gan: TianGan, hour: u32) -> GanZhi {
    let zhi = DiZhi::wrapping((hour as i64 + 1) / 2);
    let gan = TianGan::wrapping(day_gan.index() as i64 * 2 + zhi.index() as i64);
    GanZhi::new(gan, zhi)
}

/// 排四柱
pub fn four_pillars(year: i32, month: u32, day: u32, hour: u32) -> SiZhu {
    let day_gz = day_pillar(year, month, day);
    SiZhu::new(
        year_pillar(year),
        month_pillar(year, month),
        day_gz,
        hour_pillar(day_gz.gan, hour),
    )
}

/// 指定日期的日柱
pub fn date_pillar(date: CivilDate) -> GanZhi {
    day_pillar(date.year, date.month as u32, date.day as u32)
}

impl CivilDate {
    /// 当前 UTC 日期
    #[cfg(feature = "std")]
    pub fn today_utc() -> Self {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or_default();
        civil_from_days(secs.div_euclid(86_400))
    }

    pub fn days_since_epoch(&self) -> i64 {
        days_from_civil(self.year as i64, self.month as i64, self.day as i64)
    }
}
