use thiserror::Error;

/// 時區子系統錯誤
///
/// 注意：查無時區名稱「不是」錯誤——偏移計算會依序退回別名表、
/// DST 啟發式、原始標準偏移。這裡的錯誤只代表描述符本身的配置問題
/// 或解析策略回報的失敗。
#[derive(Debug, Error)]
pub enum TimeZoneError {
    /// 描述符不變量違反：宣告有 DST 卻未提供 DST 偏移。
    /// 屬於呼叫方建構的配置錯誤，與「查無時區」不同。
    #[error("時區描述符格式錯誤: {name} 宣告 DST 但未提供 DST 偏移")]
    MalformedDescriptor { name: String },

    /// 外部解析策略回報的失敗（由宿主層的網路實作產生）
    #[error("時區解析失敗: {message}")]
    Resolve { message: String },
}

/// 時區子系統結果類型別名
pub type TimeZoneResult<T> = Result<T, TimeZoneError>;
