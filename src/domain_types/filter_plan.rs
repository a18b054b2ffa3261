use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// 絕對界限
///
/// `instant` 是加寬後的粗略界限，供查詢層做初步撈取；
/// `wall_clock` 是界限當日的牆上時刻（下界 00:00:00、上界 23:59:59），
/// 供後處理器以每筆記錄的精確偏移重新過濾。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbsoluteBound {
    pub instant: DateTime<FixedOffset>,
    pub wall_clock: NaiveDateTime,
}

/// 日期範圍過濾計畫
///
/// 由日期範圍轉換器產生：指定目標時區時為 `Absolute`（單一時區的
/// 絕對時刻界限），未指定時為 `PerRecordLocalDate`（每筆記錄以自身
/// 時區的日曆日期比較，刻意不對應單一絕對時刻範圍）。
#[derive(Debug, Clone, PartialEq)]
pub enum FilterPlan {
    Absolute {
        lower: Option<AbsoluteBound>,
        upper: Option<AbsoluteBound>,
    },
    PerRecordLocalDate {
        lower: Option<NaiveDate>,
        upper: Option<NaiveDate>,
    },
}

impl FilterPlan {
    /// 無界限的逐記錄計畫（保留所有記錄）
    pub fn unbounded() -> Self {
        FilterPlan::PerRecordLocalDate {
            lower: None,
            upper: None,
        }
    }

    /// 精確測試：界限當日牆上時刻是否包含指定的當地時間
    ///
    /// 僅對 `Absolute` 計畫有意義；`PerRecordLocalDate` 以
    /// [`FilterPlan::contains_local_date`] 測試。
    pub fn contains_wall_clock(&self, local: NaiveDateTime) -> bool {
        match self {
            FilterPlan::Absolute { lower, upper } => {
                if let Some(bound) = lower {
                    if local < bound.wall_clock {
                        return false;
                    }
                }
                if let Some(bound) = upper {
                    if local > bound.wall_clock {
                        return false;
                    }
                }
                true
            }
            FilterPlan::PerRecordLocalDate { .. } => true,
        }
    }

    /// 逐記錄測試：記錄在自身時區的日曆日期是否落在範圍內
    ///
    /// 嚴格早於下界或嚴格晚於上界的記錄被排除。
    pub fn contains_local_date(&self, date: NaiveDate) -> bool {
        match self {
            FilterPlan::PerRecordLocalDate { lower, upper } => {
                if let Some(lower) = lower {
                    if date < *lower {
                        return false;
                    }
                }
                if let Some(upper) = upper {
                    if date > *upper {
                        return false;
                    }
                }
                true
            }
            FilterPlan::Absolute { .. } => true,
        }
    }
}
