//! 级联取值：按顺序尝试多个候选路径，全部缺失时使用字面默认值
//!
//! `null`、空字符串、空数组与空对象都视为缺失。

use serde_json::Value;

use crate::types::guide::Coordinates;

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        _ => true,
    }
}

/// 按点分路径读取嵌套字段，例如 `wikipedia.summary`、`airports.0.name`
pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for key in path.split('.').filter(|key| !key.is_empty()) {
        current = match current {
            Value::Object(map) => map.get(key)?,
            Value::Array(items) => items.get(key.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current).filter(|v| is_present(v))
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn as_strings(value: &Value) -> Option<Vec<String>> {
    let items: Vec<String> = match value {
        Value::Array(items) => items.iter().filter_map(as_text).collect(),
        other => as_text(other).into_iter().collect(),
    };
    Some(items).filter(|items| !items.is_empty())
}

fn as_coordinates(value: &Value) -> Option<Coordinates> {
    let lat = value["lat"].as_f64()?;
    let lng = value["lng"].as_f64().or_else(|| value["lon"].as_f64())?;
    (lat.is_finite() && lng.is_finite()).then_some(Coordinates { lat, lng })
}

/// 有序候选列表
#[derive(Debug, Default)]
pub struct Cascade<'a> {
    candidates: Vec<&'a Value>,
}

impl<'a> Cascade<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以第一个候选路径开始
    pub fn from(source: &'a Value, path: &str) -> Self {
        Self::new().or(source, path)
    }

    /// 追加一个候选路径
    pub fn or(mut self, source: &'a Value, path: &str) -> Self {
        if let Some(value) = lookup(source, path) {
            self.candidates.push(value);
        }
        self
    }

    /// 第一个存在的候选值
    pub fn value(&self) -> Option<&'a Value> {
        self.candidates.first().copied()
    }

    pub fn text_opt(&self) -> Option<String> {
        self.candidates.iter().find_map(|v| as_text(v))
    }

    pub fn text(&self, default: &str) -> String {
        self.text_opt().unwrap_or_else(|| default.to_string())
    }

    /// 字符串数组；单个字符串视为只有一项的数组
    pub fn strings_opt(&self) -> Option<Vec<String>> {
        self.candidates.iter().find_map(|v| as_strings(v))
    }

    pub fn strings(&self, default: &[&str]) -> Vec<String> {
        self.strings_opt()
            .unwrap_or_else(|| default.iter().map(|s| s.to_string()).collect())
    }

    pub fn number(&self) -> Option<f64> {
        self.candidates.iter().find_map(|v| match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        })
    }

    /// 非负整数金额，四舍五入
    pub fn amount(&self, default: u32) -> u32 {
        self.number()
            .filter(|n| n.is_finite() && *n >= 0.0)
            .map(|n| n.round().min(u32::MAX as f64) as u32)
            .unwrap_or(default)
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.candidates.iter().find_map(|v| as_coordinates(v))
    }

    /// 第一个非空数组
    pub fn items(&self) -> &'a [Value] {
        self.candidates
            .iter()
            .copied()
            .find_map(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_walks_objects_and_arrays() {
        let value = json!({ "airports": [{ "name": "Kansai" }], "empty": "", "none": null });

        assert_eq!(lookup(&value, "airports.0.name"), Some(&json!("Kansai")));
        assert!(lookup(&value, "airports.1.name").is_none());
        assert!(lookup(&value, "airports.x").is_none());
        assert!(lookup(&value, "empty").is_none());
        assert!(lookup(&value, "none").is_none());
        assert!(lookup(&Value::Null, "anything").is_none());
    }

    #[test]
    fn test_first_present_candidate_wins() {
        let search = json!({ "wikipedia": { "summary": "  " } });
        let country = json!({ "summary": "Japan is an island country in East Asia." });

        let summary = Cascade::from(&search, "wikipedia.summary")
            .or(&country, "summary")
            .text("Welcome");
        assert_eq!(summary, "Japan is an island country in East Asia.");

        assert_eq!(Cascade::from(&search, "missing").text("Welcome"), "Welcome");
    }

    #[test]
    fn test_wrong_shape_falls_through() {
        let first = json!({ "tips": [1, { "nested": true }] });
        let second = json!({ "tips": ["Carry cash"] });

        let tips = Cascade::from(&first, "tips").or(&second, "tips").strings(&[]);
        assert_eq!(tips, vec!["1".to_string()]);

        let objects = json!({ "tips": [{ "nested": true }] });
        let tips = Cascade::from(&objects, "tips").or(&second, "tips").strings(&[]);
        assert_eq!(tips, vec!["Carry cash".to_string()]);
    }

    #[test]
    fn test_numbers_and_coordinates() {
        let value = json!({
            "score": "3.2",
            "min": 29.6,
            "negative": -4,
            "center": { "lat": 31.63, "lon": -8.0 }
        });

        assert_eq!(Cascade::from(&value, "score").number(), Some(3.2));
        assert_eq!(Cascade::from(&value, "min").amount(0), 30);
        assert_eq!(Cascade::from(&value, "negative").amount(7), 7);
        assert_eq!(
            Cascade::from(&value, "center").coordinates(),
            Some(Coordinates { lat: 31.63, lng: -8.0 })
        );
    }
}
