use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// 日期界限建構錯誤
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateBoundError {
    #[error("月份超出範圍: {0}（必須介於 1 與 12 之間）")]
    MonthOutOfRange(u32),

    #[error("日期超出範圍: {year}-{month} 月的日 {day}（必須介於 1 與 {max_day} 之間）")]
    DayOutOfRange {
        year: i32,
        month: u32,
        day: u32,
        max_day: u32,
    },

    #[error("無效的日期: {year}-{month}-{day}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

/// 界限角色：範圍下界或上界
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundRole {
    Lower,
    Upper,
}

/// 使用者提供的日曆日期過濾界限
///
/// 只能透過 [`DateBound::new`] 建構：缺少的月/日依角色補上極值
/// （下界取最早、上界取最晚），明確提供但超出範圍的值在建構時即被拒絕，
/// 因此無效的界限不可能存在。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBound {
    date: NaiveDate,
    role: BoundRole,
}

impl DateBound {
    /// 建構一個有效的日期界限
    ///
    /// 缺少的 `month`/`day` 依角色補極值；閏年按實際月長處理。
    pub fn new(
        year: i32,
        month: Option<u32>,
        day: Option<u32>,
        role: BoundRole,
    ) -> Result<Self, DateBoundError> {
        let month = match month {
            Some(m) if (1..=12).contains(&m) => m,
            Some(m) => return Err(DateBoundError::MonthOutOfRange(m)),
            None => match role {
                BoundRole::Lower => 1,
                BoundRole::Upper => 12,
            },
        };

        let max_day = days_in_month(year, month).ok_or(DateBoundError::InvalidDate {
            year,
            month,
            day: day.unwrap_or(1),
        })?;
        let day = match day {
            Some(d) if d >= 1 && d <= max_day => d,
            Some(d) => {
                return Err(DateBoundError::DayOutOfRange {
                    year,
                    month,
                    day: d,
                    max_day,
                })
            }
            None => match role {
                BoundRole::Lower => 1,
                BoundRole::Upper => max_day,
            },
        };

        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(DateBoundError::InvalidDate { year, month, day })?;

        Ok(Self { date, role })
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn role(&self) -> BoundRole {
        self.role
    }

    /// 界限對應的日曆日期
    pub fn local_date(&self) -> NaiveDate {
        self.date
    }
}

/// 指定年月的天數（閏年感知）
fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next.signed_duration_since(first).num_days() as u32)
}
