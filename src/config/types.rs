use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::validation::{ValidationError, ValidationUtils, Validator};
use crate::domain_types::MonthDay;

/// 應用程序配置結構
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    pub timezone: TimeZoneConfig,
    pub resolver: ResolverConfig,
}

impl Validator for ApplicationConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // 驗證各個部分的配置
        self.timezone.validate()?;
        self.resolver.validate()?;

        Ok(())
    }
}

/// 時區計算配置
///
/// 別名表與 DST 啟發式的預設轉換日期皆為不可變配置，
/// 以建構參數傳入各元件，不使用全域狀態。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeZoneConfig {
    /// 雙向時區別名表（例如 "Europe/Kyiv" <-> "Europe/Kiev"）
    #[serde(default)]
    pub aliases: HashMap<String, String>,

    /// 描述符未提供 DST 起始日期時使用的近似值
    #[serde(default = "TimeZoneConfig::default_dst_start")]
    pub dst_default_start: MonthDay,

    /// 描述符未提供 DST 結束日期時使用的近似值
    #[serde(default = "TimeZoneConfig::default_dst_end")]
    pub dst_default_end: MonthDay,

    /// 批次後處理時每處理多少筆記錄檢查一次取消信號
    #[serde(default = "TimeZoneConfig::default_cancel_check_interval")]
    pub cancel_check_interval: usize,
}

impl TimeZoneConfig {
    fn default_dst_start() -> MonthDay {
        MonthDay { month: 3, day: 20 }
    }

    fn default_dst_end() -> MonthDay {
        MonthDay { month: 10, day: 20 }
    }

    fn default_cancel_check_interval() -> usize {
        64
    }
}

impl Default for TimeZoneConfig {
    fn default() -> Self {
        Self {
            aliases: HashMap::new(),
            dst_default_start: Self::default_dst_start(),
            dst_default_end: Self::default_dst_end(),
            cancel_check_interval: Self::default_cancel_check_interval(),
        }
    }
}

impl Validator for TimeZoneConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // 驗證別名表
        for (name, alias) in &self.aliases {
            ValidationUtils::not_empty(name, "timezone.aliases.key")?;
            ValidationUtils::not_empty(alias, "timezone.aliases.value")?;
        }

        // 驗證 DST 預設轉換日期
        ValidationUtils::in_range(self.dst_default_start.month, 1, 12, "timezone.dst_default_start.month")?;
        ValidationUtils::in_range(self.dst_default_start.day, 1, 31, "timezone.dst_default_start.day")?;
        ValidationUtils::in_range(self.dst_default_end.month, 1, 12, "timezone.dst_default_end.month")?;
        ValidationUtils::in_range(self.dst_default_end.day, 1, 31, "timezone.dst_default_end.day")?;

        ValidationUtils::in_range(self.cancel_check_interval, 1, 100_000, "timezone.cancel_check_interval")?;

        Ok(())
    }
}

/// 時區解析策略配置
///
/// 決定啟動時選用哪一個外部時區解析服務。
/// 實際的網路用戶端由宿主程式建構，核心僅定義策略介面。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// 解析服務提供者: "timeapi"、"geotimezone" 或 "googlemaps"
    pub provider: String,
    /// 服務基底 URL
    pub base_url: String,
    /// API 金鑰（googlemaps 必填）
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            provider: "timeapi".to_string(),
            base_url: "https://timeapi.io/api/TimeZone".to_string(),
            api_key: None,
        }
    }
}

impl Validator for ResolverConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        ValidationUtils::one_of(
            &self.provider.to_lowercase(),
            &["timeapi", "geotimezone", "googlemaps"]
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<String>>(),
            "resolver.provider",
        )?;

        ValidationUtils::not_empty(&self.base_url, "resolver.base_url")?;

        // googlemaps 需要 API 金鑰
        ValidationUtils::check_dependency(
            self.provider.to_lowercase() == "googlemaps",
            self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty()),
            "resolver.provider=googlemaps",
            "resolver.api_key",
        )?;

        Ok(())
    }
}
