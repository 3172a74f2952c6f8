use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;

/// 调研工具名称，对应收集数据表中的固定键集合
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    SearchDestination,
    GetCountryInfo,
    GetCityInfo,
    SearchAttractions,
    GetNeighborhoods,
    GetBudgetInfo,
    GetWeather,
    GetTransportation,
    GetSafetyInfo,
    GetCultureInfo,
    GetLocalTips,
    SearchImages,
}

impl ToolName {
    pub const ALL: [ToolName; 12] = [
        ToolName::SearchDestination,
        ToolName::GetCountryInfo,
        ToolName::GetCityInfo,
        ToolName::SearchAttractions,
        ToolName::GetNeighborhoods,
        ToolName::GetBudgetInfo,
        ToolName::GetWeather,
        ToolName::GetTransportation,
        ToolName::GetSafetyInfo,
        ToolName::GetCultureInfo,
        ToolName::GetLocalTips,
        ToolName::SearchImages,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::SearchDestination => "search_destination",
            ToolName::GetCountryInfo => "get_country_info",
            ToolName::GetCityInfo => "get_city_info",
            ToolName::SearchAttractions => "search_attractions",
            ToolName::GetNeighborhoods => "get_neighborhoods",
            ToolName::GetBudgetInfo => "get_budget_info",
            ToolName::GetWeather => "get_weather",
            ToolName::GetTransportation => "get_transportation",
            ToolName::GetSafetyInfo => "get_safety_info",
            ToolName::GetCultureInfo => "get_culture_info",
            ToolName::GetLocalTips => "get_local_tips",
            ToolName::SearchImages => "search_images",
        }
    }
}

impl Display for ToolName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ToolName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolName::ALL
            .iter()
            .find(|tool| tool.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Unknown tool: {}", s))
    }
}

/// 工具调用结果的统一信封
///
/// 只能通过 [`ToolResult::ok`] 与 [`ToolResult::failed`] 构造，
/// 因此 `success == false` 时 `data` 一定为空。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolResult {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl ToolResult {
    pub fn ok(data: Value, source: Option<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            source,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            source: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// 成功时取出数据，失败时返回错误信息
    pub fn into_data(self) -> Result<Value, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(self.error.unwrap_or_else(|| "tool returned no data".to_string())),
        }
    }
}
