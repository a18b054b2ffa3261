use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDateTime, Offset, TimeZone};
use chrono_tz::{OffsetComponents, Tz};
use tracing::{debug, warn};

use super::error::{TimeZoneError, TimeZoneResult};
use super::readable::format_offset;
use crate::config::TimeZoneConfig;
use crate::domain_types::TimeZoneDescriptor;

/// 單一條目的偏移備忘錄
///
/// 以描述符名稱為鍵；名稱不同時整個備忘錄原子性地重算，
/// 否則視為快取命中。只有兩個狀態：空、與 populated-for(name)。
#[derive(Debug, Clone)]
struct OffsetMemo {
    name: String,
    std_offset: i32,
    dst_offset: Option<i32>,
    tz: Option<Tz>,
}

/// 偏移計算器
///
/// 純計算元件：(時區描述符, 時刻) -> 帶符號 UTC 偏移（秒）。
/// 依序嘗試內建 IANA 資料庫、別名表，最後退回 DST 啟發式或
/// 原始標準偏移——查無名稱永遠不是錯誤。
///
/// 計算器廉價，建議每個請求建構一個新實例（備忘錄即無共享狀態，
/// 不需加鎖）；跨請求共用時由 `&mut self` 強制序列化存取。
pub struct OffsetCalculator {
    config: TimeZoneConfig,
    memo: Option<OffsetMemo>,
}

impl OffsetCalculator {
    /// 以指定配置建立計算器
    pub fn new(config: TimeZoneConfig) -> Self {
        Self { config, memo: None }
    }

    /// 計算描述符時區在指定時刻的 UTC 偏移（秒）
    ///
    /// 描述符為 `None` 時直接回傳時刻自帶的偏移。
    /// 唯一的錯誤情況是描述符宣告 DST 卻未提供 DST 偏移
    /// （呼叫方建構的不變量違反）。
    pub fn offset_seconds(
        &mut self,
        descriptor: Option<&TimeZoneDescriptor>,
        instant: DateTime<FixedOffset>,
    ) -> TimeZoneResult<i32> {
        let Some(descriptor) = descriptor else {
            return Ok(instant.offset().local_minus_utc());
        };

        let (std_offset, dst_offset, tz) = self.ensure_memo(descriptor)?;

        // 系統資料庫可解析時以其 DST 判定為準
        if let Some(tz) = tz {
            let resolved = tz.offset_from_utc_datetime(&instant.naive_utc());
            let dst_active = resolved.dst_offset() != Duration::zero();
            return Ok(match dst_offset {
                Some(dst) if dst_active => dst,
                _ => std_offset,
            });
        }

        // 無系統資料亦無 DST：標準偏移即答案
        let Some(dst_offset) = dst_offset else {
            return Ok(std_offset);
        };

        Ok(self.approximate_offset(descriptor, instant, std_offset, dst_offset))
    }

    /// 回傳時刻在描述符時區的牆上時間（顯示用）
    ///
    /// 描述符為 `None` 時回傳時刻自身時區的牆上時間。
    pub fn local_datetime(
        &mut self,
        descriptor: Option<&TimeZoneDescriptor>,
        instant: DateTime<FixedOffset>,
    ) -> TimeZoneResult<NaiveDateTime> {
        if descriptor.is_none() {
            return Ok(instant.naive_local());
        }
        let offset = self.offset_seconds(descriptor, instant)?;
        Ok(instant.naive_utc() + Duration::seconds(i64::from(offset)))
    }

    /// 回傳 "+HH:MM"/"-HH:MM" 形式的偏移
    pub fn readable_offset(
        &mut self,
        descriptor: &TimeZoneDescriptor,
        instant: DateTime<FixedOffset>,
    ) -> TimeZoneResult<String> {
        let offset = self.offset_seconds(Some(descriptor), instant)?;
        Ok(format_offset(offset))
    }

    /// 確保備忘錄對應目前的描述符，回傳 (標準偏移, DST 偏移, 系統時區)
    ///
    /// 名稱與備忘錄相同時為快取命中；否則整個備忘錄重算後替換。
    fn ensure_memo(
        &mut self,
        descriptor: &TimeZoneDescriptor,
    ) -> TimeZoneResult<(i32, Option<i32>, Option<Tz>)> {
        if let Some(memo) = &self.memo {
            if memo.name == descriptor.time_zone {
                return Ok((memo.std_offset, memo.dst_offset, memo.tz));
            }
            debug!(
                previous = %memo.name,
                current = %descriptor.time_zone,
                "時區描述符變更，重算偏移備忘錄"
            );
        }

        let dst_offset = if descriptor.has_day_light_saving {
            Some(descriptor.dst_offset_to_utc_seconds.ok_or_else(|| {
                TimeZoneError::MalformedDescriptor {
                    name: descriptor.time_zone.clone(),
                }
            })?)
        } else {
            None
        };

        let memo = OffsetMemo {
            name: descriptor.time_zone.clone(),
            std_offset: descriptor.standard_utc_offset_seconds,
            dst_offset,
            tz: self.resolve_tz(&descriptor.time_zone),
        };
        let result = (memo.std_offset, memo.dst_offset, memo.tz);
        self.memo = Some(memo);
        Ok(result)
    }

    /// 解析系統時區資料庫條目，查無時雙向嘗試別名表
    fn resolve_tz(&self, name: &str) -> Option<Tz> {
        if let Ok(tz) = name.parse::<Tz>() {
            return Some(tz);
        }

        // 正向: 名稱為別名表的鍵
        if let Some(alias) = self.config.aliases.get(name) {
            if let Ok(tz) = alias.parse::<Tz>() {
                debug!(name, alias, "時區名稱經別名表解析");
                return Some(tz);
            }
        }

        // 反向: 名稱為別名表的值
        if let Some(alias) = self
            .config
            .aliases
            .iter()
            .find(|(_, v)| v.as_str() == name)
            .map(|(k, _)| k)
        {
            if let Ok(tz) = alias.parse::<Tz>() {
                debug!(name, alias, "時區名稱經別名表反向解析");
                return Some(tz);
            }
        }

        None
    }

    /// DST 啟發式：無權威規則時粗略判定標準時或日光節約時
    ///
    /// 以當年的近似轉換日構造轉換時刻——起始為當日 03:00（標準偏移）、
    /// 結束為當日 04:00（DST 偏移），落在 [start, end) 內視為 DST。
    /// 實際轉換日可能相差數日（真實時區多採「最近的星期日」規則），
    /// 此為盡力而為的近似，永遠不會當成錯誤。
    fn approximate_offset(
        &self,
        descriptor: &TimeZoneDescriptor,
        instant: DateTime<FixedOffset>,
        std_offset: i32,
        dst_offset: i32,
    ) -> i32 {
        warn!(
            time_zone = %descriptor.time_zone,
            "無法解析該時區的 DST 規則"
        );
        warn!("將使用日光節約時間起訖的近似日期");

        let start_date = descriptor.dst_start.unwrap_or(self.config.dst_default_start);
        let end_date = descriptor.dst_end.unwrap_or(self.config.dst_default_end);
        let year = instant.year();

        let Some(start) = FixedOffset::east_opt(std_offset).and_then(|offset| {
            offset
                .with_ymd_and_hms(year, start_date.month, start_date.day, 3, 0, 0)
                .single()
        }) else {
            return std_offset;
        };
        let Some(end) = FixedOffset::east_opt(dst_offset).and_then(|offset| {
            offset
                .with_ymd_and_hms(year, end_date.month, end_date.day, 4, 0, 0)
                .single()
        }) else {
            return std_offset;
        };

        if instant >= start && instant < end {
            dst_offset
        } else {
            std_offset
        }
    }
}
