use chrono::{FixedOffset, Offset, TimeZone, Utc};

use crate::domain_types::{AbsoluteBound, BoundRole, DateBound, FilterPlan, TimeZoneDescriptor};

/// 將日曆日期界限轉換為過濾計畫
///
/// 指定描述符時產生 `Absolute` 計畫：下界取 00:00:00、上界取
/// 23:59:59，並使用「加寬」後的偏移——下界取 max(標準, DST)、
/// 上界取 min(標準, DST)。在 DST 轉換附近，未知確切時刻前無法
/// 斷定界限牆上時間適用哪個偏移；取 max/min 只會放寬範圍，
/// 保證粗略界限不會錯誤排除邊界上的記錄，加寬多收的記錄
/// 由後處理器以每筆精確偏移再剔除。
///
/// 未指定描述符時產生 `PerRecordLocalDate` 計畫：每筆記錄以
/// 自身時區的日曆日期逐筆比較。
///
/// 轉換永不失敗；缺少的界限直接省略對應的限制。
pub fn translate_date_range(
    lower: Option<&DateBound>,
    upper: Option<&DateBound>,
    descriptor: Option<&TimeZoneDescriptor>,
) -> FilterPlan {
    match descriptor {
        Some(descriptor) => {
            let std_offset = descriptor.standard_utc_offset_seconds;
            let dst_offset = if descriptor.has_day_light_saving {
                descriptor.dst_offset_to_utc_seconds.unwrap_or(std_offset)
            } else {
                std_offset
            };

            FilterPlan::Absolute {
                lower: lower.and_then(|b| absolute_bound(b, std_offset.max(dst_offset))),
                upper: upper.and_then(|b| absolute_bound(b, std_offset.min(dst_offset))),
            }
        }
        None => FilterPlan::PerRecordLocalDate {
            lower: lower.map(DateBound::local_date),
            upper: upper.map(DateBound::local_date),
        },
    }
}

/// 以指定偏移構造界限的絕對時刻與牆上時刻
fn absolute_bound(bound: &DateBound, offset_seconds: i32) -> Option<AbsoluteBound> {
    let (hour, minute, second) = match bound.role() {
        BoundRole::Lower => (0, 0, 0),
        BoundRole::Upper => (23, 59, 59),
    };
    let wall_clock = bound.local_date().and_hms_opt(hour, minute, second)?;

    // 描述符偏移超出 chrono 可表示範圍時退回 UTC（界限只會更寬）
    let offset = FixedOffset::east_opt(offset_seconds).unwrap_or_else(|| Utc.fix());
    let instant = offset.from_local_datetime(&wall_clock).single()?;

    Some(AbsoluteBound { instant, wall_clock })
}
