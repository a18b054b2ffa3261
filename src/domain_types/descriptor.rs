use serde::{Deserialize, Serialize};

/// 月/日組合，表示近似的 DST 轉換日期
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

/// 時區描述符
///
/// 由外部解析服務（IP 定位、座標定位或 IANA 名稱查詢）在每個請求中
/// 取得一次的不可變值物件。核心不會修改它，也不跨請求快取。
///
/// 不變量: `has_day_light_saving == true` 時 `dst_offset_to_utc_seconds`
/// 必須存在；違反時由偏移計算器回報配置錯誤。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeZoneDescriptor {
    /// 時區名稱（IANA 識別碼或供應商自訂名稱）
    pub time_zone: String,

    /// 標準 UTC 偏移（秒），範圍約 -12h..+14h
    pub standard_utc_offset_seconds: i32,

    /// 是否實行日光節約時間
    pub has_day_light_saving: bool,

    /// DST 期間對 UTC 的偏移（秒）
    #[serde(default)]
    pub dst_offset_to_utc_seconds: Option<i32>,

    /// DST 大約起始日期；缺省時使用配置中的預設值
    #[serde(default)]
    pub dst_start: Option<MonthDay>,

    /// DST 大約結束日期；缺省時使用配置中的預設值
    #[serde(default)]
    pub dst_end: Option<MonthDay>,
}

impl TimeZoneDescriptor {
    /// 建立無 DST 的描述符
    pub fn fixed(time_zone: impl Into<String>, standard_utc_offset_seconds: i32) -> Self {
        Self {
            time_zone: time_zone.into(),
            standard_utc_offset_seconds,
            has_day_light_saving: false,
            dst_offset_to_utc_seconds: None,
            dst_start: None,
            dst_end: None,
        }
    }

    /// 建立有 DST 的描述符
    pub fn with_dst(
        time_zone: impl Into<String>,
        standard_utc_offset_seconds: i32,
        dst_offset_to_utc_seconds: i32,
    ) -> Self {
        Self {
            time_zone: time_zone.into(),
            standard_utc_offset_seconds,
            has_day_light_saving: true,
            dst_offset_to_utc_seconds: Some(dst_offset_to_utc_seconds),
            dst_start: None,
            dst_end: None,
        }
    }

    /// 設定近似的 DST 轉換日期
    pub fn with_transition_dates(mut self, start: MonthDay, end: MonthDay) -> Self {
        self.dst_start = Some(start);
        self.dst_end = Some(end);
        self
    }
}
