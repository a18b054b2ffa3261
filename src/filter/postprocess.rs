use chrono::{FixedOffset, Offset, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

use super::error::{FilterError, FilterResult};
use crate::config::TimeZoneConfig;
use crate::domain_types::{ExportRecord, FilterPlan, TimeZoneDescriptor};
use crate::timezone::{format_offset, OffsetCalculator};

/// 交易批次後處理器
///
/// 對查詢層以加寬粗略界限撈回的記錄套用精確規則：
/// 指定描述符時逐筆計算精確偏移、就地改寫顯示用時間戳與偏移字串，
/// 並剔除加寬多收的記錄；未指定描述符時僅以每筆記錄自身的
/// 日曆日期過濾，不呼叫偏移計算器。
pub struct TransactionPostProcessor {
    calculator: OffsetCalculator,
    cancel_check_interval: usize,
}

impl TransactionPostProcessor {
    /// 以指定配置建立後處理器
    pub fn new(config: TimeZoneConfig) -> Self {
        let cancel_check_interval = config.cancel_check_interval.max(1);
        Self {
            calculator: OffsetCalculator::new(config),
            cancel_check_interval,
        }
    }

    /// 套用過濾計畫並調整顯示時間
    ///
    /// 保留記錄維持原有相對順序；無時間戳的記錄原樣保留，
    /// 不視為批次錯誤。長批次中每隔固定筆數檢查一次取消信號；
    /// 取消時不會留下時間戳已改、偏移未改的半更新記錄。
    pub fn apply(
        &mut self,
        records: Vec<ExportRecord>,
        descriptor: Option<&TimeZoneDescriptor>,
        plan: &FilterPlan,
        cancel: Option<&AtomicBool>,
    ) -> FilterResult<Vec<ExportRecord>> {
        let total = records.len();
        let mut retained = Vec::with_capacity(total);

        for (index, mut record) in records.into_iter().enumerate() {
            if index % self.cancel_check_interval == 0 {
                if let Some(flag) = cancel {
                    if flag.load(Ordering::Relaxed) {
                        return Err(FilterError::Cancelled { processed: index });
                    }
                }
            }

            let Some(timestamp) = record.transaction_date else {
                // 無時間戳的記錄不參與過濾，原樣通過
                retained.push(record);
                continue;
            };

            match descriptor {
                None => {
                    // 逐記錄模式: 只看記錄自身時區的日曆日期
                    if plan.contains_local_date(timestamp.date_naive()) {
                        retained.push(record);
                    }
                }
                Some(descriptor) => {
                    let offset = self.calculator.offset_seconds(Some(descriptor), timestamp)?;
                    let display_offset =
                        FixedOffset::east_opt(offset).unwrap_or_else(|| Utc.fix());
                    let adjusted = timestamp.with_timezone(&display_offset);

                    // 精確（未加寬）測試: 以記錄的實際偏移比對界限牆上時刻
                    if !plan.contains_wall_clock(adjusted.naive_local()) {
                        continue;
                    }

                    // 時間戳與偏移字串成對改寫
                    record.transaction_date = Some(adjusted);
                    record.offset = Some(format_offset(offset));
                    retained.push(record);
                }
            }
        }

        debug!(total, retained = retained.len(), "交易批次後處理完成");
        Ok(retained)
    }
}
