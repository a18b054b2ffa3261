use thiserror::Error;

use crate::timezone::TimeZoneError;

/// 過濾子系統錯誤
#[derive(Debug, Error)]
pub enum FilterError {
    /// 批次處理期間收到取消信號；原樣向呼叫方傳播，不做轉譯
    #[error("批次處理在處理 {processed} 筆記錄後被取消")]
    Cancelled { processed: usize },

    /// 時區子系統回報的配置錯誤
    #[error(transparent)]
    TimeZone(#[from] TimeZoneError),
}

/// 過濾子系統結果類型別名
pub type FilterResult<T> = Result<T, FilterError>;
