use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 匯出用的交易記錄
///
/// 由查詢層以粗略的界限撈取後交給後處理器，後處理器就地改寫
/// `transaction_date`（顯示用當地時間）與 `offset`（顯示用偏移字串），
/// 並剔除精確過濾後超出範圍的記錄。記錄僅屬於單一請求，
/// 回應序列化後即丟棄。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub transaction_id: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub amount: Option<Decimal>,

    #[serde(default)]
    pub latitude: Option<Decimal>,

    #[serde(default)]
    pub longitude: Option<Decimal>,

    /// 交易時間戳；入庫時帶有自身時區的偏移
    #[serde(default)]
    pub transaction_date: Option<DateTime<FixedOffset>>,

    /// 顯示用偏移字串（"+HH:MM"/"-HH:MM"），由後處理器改寫，不持久化
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<String>,
}

impl ExportRecord {
    /// 建立只帶識別碼與時間戳的記錄，其餘欄位留空
    pub fn bare(
        transaction_id: impl Into<String>,
        transaction_date: Option<DateTime<FixedOffset>>,
    ) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            name: None,
            email: None,
            amount: None,
            latitude: None,
            longitude: None,
            transaction_date,
            offset: None,
        }
    }
}
