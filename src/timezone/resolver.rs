use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;

use super::error::{TimeZoneError, TimeZoneResult};
use crate::domain_types::TimeZoneDescriptor;

/// 時區解析請求
#[derive(Debug, Clone, PartialEq)]
pub enum TimeZoneQuery {
    /// 依 IANA 名稱查詢
    IanaName(String),
    /// 依呼叫端 IPv4 位址查詢
    Ip(String),
    /// 依地理座標查詢
    Coordinates { latitude: Decimal, longitude: Decimal },
}

/// 時區解析策略介面
///
/// 可互換的外部解析服務（timeapi、geotimezone、googlemaps 等）
/// 實作此介面，啟動時依 [`crate::config::ResolverConfig`] 選定一個。
/// 網路實作屬宿主層；核心只消費解析出的描述符，
/// 解析失敗在進入核心之前即回報給呼叫方。
#[async_trait]
pub trait TimeZoneResolver: Send + Sync {
    /// 依 IANA 名稱解析時區描述符
    async fn by_iana_name(&self, name: &str) -> TimeZoneResult<TimeZoneDescriptor>;

    /// 依 IPv4 位址解析呼叫端的時區描述符
    async fn by_ip(&self, ipv4: &str) -> TimeZoneResult<TimeZoneDescriptor>;

    /// 依地理座標解析時區描述符
    async fn by_coordinates(
        &self,
        latitude: Decimal,
        longitude: Decimal,
    ) -> TimeZoneResult<TimeZoneDescriptor>;

    /// 依請求類型分派到對應的解析方法
    async fn resolve(&self, query: &TimeZoneQuery) -> TimeZoneResult<TimeZoneDescriptor> {
        match query {
            TimeZoneQuery::IanaName(name) => self.by_iana_name(name).await,
            TimeZoneQuery::Ip(ipv4) => self.by_ip(ipv4).await,
            TimeZoneQuery::Coordinates { latitude, longitude } => {
                self.by_coordinates(*latitude, *longitude).await
            }
        }
    }
}

/// 以靜態表為底的解析器
///
/// 供應商提供的靜態時區資料或測試替身使用；
/// 只支援名稱查詢，IP 與座標查詢一律回報解析失敗。
#[derive(Debug, Default)]
pub struct MappedResolver {
    table: HashMap<String, TimeZoneDescriptor>,
}

impl MappedResolver {
    pub fn new(table: HashMap<String, TimeZoneDescriptor>) -> Self {
        Self { table }
    }

    /// 加入一筆描述符，以其名稱為鍵
    pub fn with_descriptor(mut self, descriptor: TimeZoneDescriptor) -> Self {
        self.table.insert(descriptor.time_zone.clone(), descriptor);
        self
    }
}

#[async_trait]
impl TimeZoneResolver for MappedResolver {
    async fn by_iana_name(&self, name: &str) -> TimeZoneResult<TimeZoneDescriptor> {
        self.table
            .get(name)
            .cloned()
            .ok_or_else(|| TimeZoneError::Resolve {
                message: format!("靜態表中查無時區: {name}"),
            })
    }

    async fn by_ip(&self, ipv4: &str) -> TimeZoneResult<TimeZoneDescriptor> {
        Err(TimeZoneError::Resolve {
            message: format!("靜態表解析器不支援 IP 查詢: {ipv4}"),
        })
    }

    async fn by_coordinates(
        &self,
        latitude: Decimal,
        longitude: Decimal,
    ) -> TimeZoneResult<TimeZoneDescriptor> {
        Err(TimeZoneError::Resolve {
            message: format!("靜態表解析器不支援座標查詢: ({latitude}, {longitude})"),
        })
    }
}
