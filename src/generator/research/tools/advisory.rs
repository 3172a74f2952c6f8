use anyhow::{Result, bail};
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use super::{TravelTool, parse_args, schema_of};
use crate::apis::ApiGateway;
use crate::reference::{self, CountryProfile};
use crate::types::ToolName;
use crate::types::guide::SafetyRating;

/// 所有按国家查询的工具共用的参数
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountryScopedArgs {
    /// 目的地或国家名称（英文）
    pub destination: String,
    #[serde(default)]
    pub country_code: Option<String>,
}

impl CountryScopedArgs {
    fn profile(&self) -> Option<&'static CountryProfile> {
        reference::resolve(self.country_code.as_deref(), &self.destination)
    }
}

/// GOV.UK 的 `avoid_all_but_essential_travel_to_parts` → `Avoid all but essential travel to parts`
fn humanize_alert(status: &str) -> String {
    let text = status.replace('_', " ");
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => text,
    }
}

/// 安全信息：实时风险评分 + GOV.UK 建议 + 参考档案
///
/// 负载：`overallRating`, `advisoryScore`, `advisorySummary`, `summary`, `concerns[]`,
/// `areasToAvoid[]`, `tips[]`, `emergencyNumbers {police,ambulance,tourist}`,
/// `healthAdvice[]`, `sources[]`
pub struct SafetyInfo {
    gateway: Arc<ApiGateway>,
}

impl SafetyInfo {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl TravelTool for SafetyInfo {
    fn name(&self) -> ToolName {
        ToolName::GetSafetyInfo
    }

    fn label(&self) -> &'static str {
        "Reviewing safety advisories"
    }

    fn input_schema(&self) -> Value {
        schema_of::<CountryScopedArgs>()
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let args: CountryScopedArgs = parse_args(self.name(), args)?;
        let profile = args.profile();

        let mut code = args
            .country_code
            .clone()
            .filter(|c| !c.trim().is_empty())
            .or_else(|| profile.map(|p| p.code.to_string()));
        if code.is_none() {
            code = self
                .gateway
                .country_by_name(&args.destination)
                .await
                .map(|facts| facts.cca2);
        }

        let advisory = match code.as_deref() {
            Some(code) => self.gateway.travel_advisory(code).await,
            None => None,
        };
        let uk = self.gateway.uk_travel_advice(&args.destination).await;

        if advisory.is_none() && uk.is_none() && profile.is_none() {
            bail!("No safety data for {}", args.destination);
        }

        let overall_rating = advisory
            .as_ref()
            .map(|a| SafetyRating::from_advisory_score(a.score).as_str())
            .or_else(|| profile.map(|p| SafetyRating::normalize(p.safety.rating).as_str()));

        let mut sources = Vec::new();
        if advisory.is_some() {
            sources.push("travel-advisory.info");
        }
        if uk.is_some() {
            sources.push("gov.uk");
        }
        if profile.is_some() {
            sources.push("reference");
        }

        let safety = profile.map(|p| &p.safety);
        Ok(json!({
            "overallRating": overall_rating,
            "advisoryScore": advisory.as_ref().map(|a| a.score),
            "advisorySummary": advisory.as_ref().and_then(|a| a.message.clone()),
            "summary": safety
                .map(|s| s.summary.to_string())
                .or_else(|| uk.as_ref().and_then(|u| u.description.clone())),
            "concerns": safety.map(|s| s.concerns),
            "areasToAvoid": uk
                .as_ref()
                .map(|u| u.alert_status.iter().map(|s| humanize_alert(s)).collect::<Vec<_>>())
                .filter(|alerts| !alerts.is_empty()),
            "tips": safety.map(|s| s.tips),
            "emergencyNumbers": safety.map(|s| json!({
                "police": s.police,
                "ambulance": s.ambulance,
                "tourist": s.tourist,
            })),
            "healthAdvice": safety.map(|s| s.health),
            "adviceUrl": uk.as_ref().and_then(|u| u.url.clone()),
            "countryCode": code,
            "sources": sources,
            "source": sources.first(),
        }))
    }
}

/// 文化礼仪：参考档案 + DuckDuckGo 即时答案
///
/// 负载：`summary`, `etiquette[]`, `dresscode`, `tipping`, `greetings`, `taboos[]`,
/// `localCustoms[]`, `relatedTopics[]`
pub struct CultureInfo {
    gateway: Arc<ApiGateway>,
}

impl CultureInfo {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl TravelTool for CultureInfo {
    fn name(&self) -> ToolName {
        ToolName::GetCultureInfo
    }

    fn label(&self) -> &'static str {
        "Learning local culture"
    }

    fn input_schema(&self) -> Value {
        schema_of::<CountryScopedArgs>()
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let args: CountryScopedArgs = parse_args(self.name(), args)?;
        let profile = args.profile();
        let answer = self
            .gateway
            .web_search(&format!("{} culture", args.destination))
            .await;

        if profile.is_none() && answer.is_none() {
            bail!("No culture data for {}", args.destination);
        }

        let culture = profile.map(|p| &p.culture);
        Ok(json!({
            "summary": culture
                .map(|c| c.summary.to_string())
                .or_else(|| answer.as_ref().and_then(|a| a.abstract_text.clone())),
            "etiquette": culture.map(|c| c.etiquette),
            "dresscode": culture.map(|c| c.dress),
            "tipping": profile.map(|p| p.cost.tipping),
            "greetings": culture.map(|c| c.greetings),
            "taboos": culture.map(|c| c.taboos),
            "localCustoms": culture.map(|c| c.customs),
            "relatedTopics": answer
                .as_ref()
                .map(|a| a.related_topics.iter().map(|t| t.text.clone()).collect::<Vec<_>>())
                .unwrap_or_default(),
            "source": if profile.is_some() { "reference" } else { "duckduckgo" },
        }))
    }
}

/// 本地贴士：常见错误、适合人群与搜索到的相关主题
///
/// 负载：`mistakes[] {mistake,why,instead}`, `bestFor[] {type,why,highlights}`, `tips[]`
pub struct LocalTips {
    gateway: Arc<ApiGateway>,
}

impl LocalTips {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl TravelTool for LocalTips {
    fn name(&self) -> ToolName {
        ToolName::GetLocalTips
    }

    fn label(&self) -> &'static str {
        "Gathering local tips"
    }

    fn input_schema(&self) -> Value {
        schema_of::<CountryScopedArgs>()
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let args: CountryScopedArgs = parse_args(self.name(), args)?;
        let profile = args.profile();
        let tips: Vec<String> = self
            .gateway
            .web_search(&format!("{} travel tips", args.destination))
            .await
            .map(|a| a.related_topics.into_iter().map(|t| t.text).collect())
            .unwrap_or_default();

        if profile.is_none() && tips.is_empty() {
            bail!("No local tips for {}", args.destination);
        }

        let mistakes: Option<Vec<Value>> = profile.map(|p| {
            p.mistakes
                .iter()
                .map(|m| json!({ "mistake": m.mistake, "why": m.why, "instead": m.instead }))
                .collect()
        });
        let best_for: Option<Vec<Value>> = profile.map(|p| {
            p.best_for
                .iter()
                .map(|f| json!({ "type": f.kind, "why": f.why, "highlights": f.highlights }))
                .collect()
        });

        Ok(json!({
            "mistakes": mistakes,
            "bestFor": best_for,
            "tips": tips,
            "source": if profile.is_some() { "reference" } else { "duckduckgo" },
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_alert() {
        assert_eq!(
            humanize_alert("avoid_all_but_essential_travel_to_parts"),
            "Avoid all but essential travel to parts"
        );
        assert_eq!(humanize_alert(""), "");
    }

    #[test]
    fn test_country_scoped_args_resolve_profile() {
        let args: CountryScopedArgs =
            serde_json::from_value(json!({ "destination": "Kyoto" })).unwrap();
        assert_eq!(args.profile().map(|p| p.code), Some("JP"));

        let args: CountryScopedArgs = serde_json::from_value(
            json!({ "destination": "Somewhere", "countryCode": "ma" }),
        )
        .unwrap();
        assert_eq!(args.profile().map(|p| p.code), Some("MA"));
    }
}
