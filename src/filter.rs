/// 日期範圍過濾模組
///
/// 將使用者提供的日曆日期界限轉換為過濾計畫（單一目標時區的
/// 絕對界限、或逐記錄的當地日期比較），並對撈回的交易批次
/// 套用精確的過濾與顯示調整。
// 宣告子模組
pub mod error;
pub mod postprocess;
pub mod translate;

// 重新導出常用組件
pub use error::{FilterError, FilterResult};
pub use postprocess::TransactionPostProcessor;
pub use translate::translate_date_range;
