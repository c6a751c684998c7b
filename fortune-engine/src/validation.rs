//! # 出生信息校验
//!
//! 排盘本身不做校验，调用方在排盘前使用这里的辅助函数。

use alloc::vec::Vec;
use frame_support::BoundedVec;

use crate::calendar::four_pillars;
use crate::types::{BirthRecord, SiZhu};
use crate::LOG_TARGET;

/// 最早出生年份
pub const MIN_BIRTH_YEAR: i32 = 1900;
/// 最晚出生年份
pub const MAX_BIRTH_YEAR: i32 = 2100;

/// 时辰不详时使用的时刻（12:00）
pub const UNKNOWN_TIME_HOUR: u8 = 12;
pub const UNKNOWN_TIME_MINUTE: u8 = 0;

/// 出生信息校验错误
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BirthRecordError {
    /// 年份超出 1900-2100
    YearOutOfRange,
    /// 月份不在 1-12
    InvalidMonth,
    /// 日期超出当月天数
    InvalidDay,
    /// 小时不在 0-23
    InvalidHour,
    /// 分钟不在 0-59
    InvalidMinute,
    /// 出生地过长
    BirthPlaceTooLong,
}

/// 是否闰年
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// 当月天数，月份无效时返回 0
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

impl BirthRecord {
    pub fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8) -> Self {
        Self { year, month, day, hour, minute, ..Default::default() }
    }

    /// 出生时辰不详
    pub fn with_unknown_time(mut self) -> Self {
        self.unknown_time = true;
        self
    }

    /// 农历标记
    pub fn with_lunar(mut self, is_lunar: bool) -> Self {
        self.is_lunar = is_lunar;
        self
    }

    /// 设置出生地（UTF-8 字节）
    pub fn with_birth_place(mut self, place: &[u8]) -> Result<Self, BirthRecordError> {
        self.birth_place = BoundedVec::try_from(Vec::from(place))
            .map_err(|_| BirthRecordError::BirthPlaceTooLong)?;
        Ok(self)
    }

    /// 校验各字段范围
    ///
    /// 时辰不详时不检查时、分。
    pub fn validate(&self) -> Result<(), BirthRecordError> {
        let result = self.check();
        if let Err(e) = result {
            log::warn!(
                target: LOG_TARGET,
                "invalid birth record {}-{}-{} {}:{}: {:?}",
                self.year,
                self.month,
                self.day,
                self.hour,
                self.minute,
                e,
            );
        }
        result
    }

    fn check(&self) -> Result<(), BirthRecordError> {
        if !(MIN_BIRTH_YEAR..=MAX_BIRTH_YEAR).contains(&self.year) {
            return Err(BirthRecordError::YearOutOfRange);
        }
        if !(1..=12).contains(&self.month) {
            return Err(BirthRecordError::InvalidMonth);
        }
        if self.day == 0 || self.day > days_in_month(self.year, self.month) {
            return Err(BirthRecordError::InvalidDay);
        }
        if self.unknown_time {
            return Ok(());
        }
        if self.hour > 23 {
            return Err(BirthRecordError::InvalidHour);
        }
        if self.minute > 59 {
            return Err(BirthRecordError::InvalidMinute);
        }
        Ok(())
    }

    /// 时辰不详时按 12:00 处理
    pub fn normalized(&self) -> Self {
        let mut record = self.clone();
        if record.unknown_time {
            record.hour = UNKNOWN_TIME_HOUR;
            record.minute = UNKNOWN_TIME_MINUTE;
        }
        record
    }

    /// 校验后排出四柱
    pub fn to_sizhu(&self) -> Result<SiZhu, BirthRecordError> {
        self.validate()?;

        if self.is_lunar {
            log::warn!(
                target: LOG_TARGET,
                "lunar birth date {}-{}-{} is charted as solar",
                self.year,
                self.month,
                self.day,
            );
        }

        let record = self.normalized();
        Ok(four_pillars(record.year, record.month as u32, record.day as u32, record.hour as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::day_pillar;
    use frame_support::{assert_err, assert_ok};

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 12), 31);
        assert_eq!(days_in_month(2023, 13), 0);
    }

    #[test]
    fn test_validate() {
        assert_ok!(BirthRecord::new(1990, 5, 15, 14, 30).validate());
        assert_ok!(BirthRecord::new(2000, 2, 29, 0, 0).validate());
        assert_ok!(BirthRecord::new(MIN_BIRTH_YEAR, 1, 1, 23, 59).validate());
        assert_ok!(BirthRecord::new(MAX_BIRTH_YEAR, 12, 31, 0, 0).validate());

        assert_err!(BirthRecord::new(1899, 12, 31, 0, 0).validate(), BirthRecordError::YearOutOfRange);
        assert_err!(BirthRecord::new(2101, 1, 1, 0, 0).validate(), BirthRecordError::YearOutOfRange);
        assert_err!(BirthRecord::new(1990, 0, 1, 0, 0).validate(), BirthRecordError::InvalidMonth);
        assert_err!(BirthRecord::new(1990, 13, 1, 0, 0).validate(), BirthRecordError::InvalidMonth);
        assert_err!(BirthRecord::new(2023, 2, 29, 0, 0).validate(), BirthRecordError::InvalidDay);
        assert_err!(BirthRecord::new(1990, 4, 31, 0, 0).validate(), BirthRecordError::InvalidDay);
        assert_err!(BirthRecord::new(1990, 4, 0, 0, 0).validate(), BirthRecordError::InvalidDay);
        assert_err!(BirthRecord::new(1990, 4, 1, 24, 0).validate(), BirthRecordError::InvalidHour);
        assert_err!(BirthRecord::new(1990, 4, 1, 10, 60).validate(), BirthRecordError::InvalidMinute);
    }

    #[test]
    fn unknown_time_skips_time_checks() {
        let record = BirthRecord::new(1990, 4, 1, 99, 99).with_unknown_time();
        assert_ok!(record.validate());

        let normalized = record.normalized();
        assert_eq!(normalized.hour, 12);
        assert_eq!(normalized.minute, 0);
        // 时辰已知时保持原值
        assert_eq!(BirthRecord::new(1990, 4, 1, 7, 45).normalized().hour, 7);
    }

    #[test]
    fn test_to_sizhu() {
        let sizhu = BirthRecord::new(2000, 1, 1, 12, 0).to_sizhu();
        assert_ok!(sizhu);
        assert_eq!(sizhu, Ok(four_pillars(2000, 1, 1, 12)));

        let unknown = BirthRecord::new(2000, 1, 1, 3, 0).with_unknown_time().to_sizhu();
        assert_eq!(unknown, Ok(four_pillars(2000, 1, 1, 12)));

        assert_err!(BirthRecord::new(2000, 2, 30, 12, 0).to_sizhu(), BirthRecordError::InvalidDay);
    }

    #[test]
    fn lunar_flag_does_not_change_pillars() {
        let solar = BirthRecord::new(1988, 8, 8, 8, 8).to_sizhu();
        let lunar = BirthRecord::new(1988, 8, 8, 8, 8).with_lunar(true).to_sizhu();
        assert_eq!(solar, lunar);
        assert_eq!(lunar.map(|s| s.day), Ok(day_pillar(1988, 8, 8)));
    }

    #[test]
    fn test_birth_place() {
        let record = BirthRecord::new(1990, 1, 1, 0, 0).with_birth_place("서울".as_bytes());
        assert_ok!(&record);
        assert_eq!(record.map(|r| r.birth_place.into_inner()), Ok("서울".as_bytes().to_vec()));

        let too_long = [b'a'; 65];
        assert_err!(
            BirthRecord::new(1990, 1, 1, 0, 0).with_birth_place(&too_long),
            BirthRecordError::BirthPlaceTooLong
        );
    }
}
