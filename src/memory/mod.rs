use serde_json::Value;
use std::collections::BTreeMap;

use crate::types::ToolName;

static NULL: Value = Value::Null;

/// 单次调研过程中按工具名累积的成功结果
///
/// 只保存成功工具的 `data`，失败的工具不会出现在表中。
#[derive(Debug, Clone, Default)]
pub struct CollectedData {
    data: BTreeMap<ToolName, Value>,
}

impl CollectedData {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录工具的成功数据，同名工具的旧数据会被替换
    pub fn store(&mut self, tool: ToolName, data: Value) {
        self.data.insert(tool, data);
    }

    pub fn get(&self, tool: ToolName) -> Option<&Value> {
        self.data.get(&tool)
    }

    /// 取出工具数据，缺失时返回 `Value::Null`，便于级联取值
    pub fn payload(&self, tool: ToolName) -> &Value {
        self.data.get(&tool).unwrap_or(&NULL)
    }

    pub fn has_data(&self, tool: ToolName) -> bool {
        self.data.contains_key(&tool)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_store_and_read_back() {
        let mut collected = CollectedData::new();
        assert!(collected.is_empty());

        collected.store(ToolName::GetCountryInfo, json!({ "name": "Japan" }));

        assert!(collected.has_data(ToolName::GetCountryInfo));
        assert_eq!(collected.len(), 1);
        assert_eq!(
            collected.get(ToolName::GetCountryInfo),
            Some(&json!({ "name": "Japan" }))
        );
    }

    #[test]
    fn test_missing_payload_is_null() {
        let collected = CollectedData::new();
        assert!(collected.payload(ToolName::GetWeather).is_null());
        assert!(collected.get(ToolName::GetWeather).is_none());
        assert!(!collected.has_data(ToolName::GetWeather));
    }

    #[test]
    fn test_later_store_replaces_earlier_payload() {
        let mut collected = CollectedData::new();
        collected.store(ToolName::GetWeather, json!({ "climate": "a long description" }));
        collected.store(ToolName::GetWeather, json!({ "climate": "short" }));

        assert_eq!(collected.len(), 1);
        assert_eq!(
            collected.payload(ToolName::GetWeather),
            &json!({ "climate": "short" })
        );
    }
}
