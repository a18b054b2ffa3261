/// 時區計算模組
///
/// 提供偏移計算器（含別名退回與 DST 啟發式）、可讀偏移格式化
/// 與外部解析策略介面。所有計算皆為同步純 CPU 運算。
// 宣告子模組
pub mod error;
pub mod offset;
pub mod readable;
pub mod resolver;

// 重新導出常用組件
pub use error::{TimeZoneError, TimeZoneResult};
pub use offset::OffsetCalculator;
pub use readable::{format_offset, parse_lenient_offset_minutes, parse_offset};
pub use resolver::{MappedResolver, TimeZoneQuery, TimeZoneResolver};
