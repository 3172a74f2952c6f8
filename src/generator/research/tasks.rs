//! 固定的调研任务序列与前端可见的阶段表

use serde_json::{Value, json};

use crate::memory::CollectedData;
use crate::types::{ResearchStep, StepStatus, ToolName};

/// 阶段定义
#[derive(Debug, Clone, Copy)]
pub struct StepDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const STEPS: [StepDefinition; 12] = [
    StepDefinition {
        id: "init",
        name: "Initializing",
        description: "Preparing research agents",
    },
    StepDefinition {
        id: "overview",
        name: "Destination Overview",
        description: "Locating the destination and gathering country facts",
    },
    StepDefinition {
        id: "cities",
        name: "Top Cities",
        description: "Finding the most important cities",
    },
    StepDefinition {
        id: "places",
        name: "Attractions",
        description: "Searching landmarks and points of interest",
    },
    StepDefinition {
        id: "neighborhoods",
        name: "Neighborhoods",
        description: "Mapping districts and where to stay",
    },
    StepDefinition {
        id: "costs",
        name: "Budget & Weather",
        description: "Estimating costs and checking the climate",
    },
    StepDefinition {
        id: "transport",
        name: "Transportation",
        description: "Airports, transit and getting around",
    },
    StepDefinition {
        id: "safety",
        name: "Safety",
        description: "Reviewing travel advisories",
    },
    StepDefinition {
        id: "culture",
        name: "Culture",
        description: "Etiquette, customs and traditions",
    },
    StepDefinition {
        id: "tips",
        name: "Local Tips",
        description: "Common mistakes and who it suits",
    },
    StepDefinition {
        id: "images",
        name: "Images",
        description: "Collecting destination photos",
    },
    StepDefinition {
        id: "synthesize",
        name: "Creating Guide",
        description: "Compiling the travel guide",
    },
];

pub fn research_step(index: usize, status: StepStatus) -> ResearchStep {
    let def = STEPS[index.min(STEPS.len() - 1)];
    ResearchStep {
        id: def.id.to_string(),
        name: def.name.to_string(),
        description: def.description.to_string(),
        status,
    }
}

/// 参数构造器的输入：目的地与此前所有成功结果的只读快照
pub struct TaskInput<'a> {
    pub destination: &'a str,
    pub collected: &'a CollectedData,
    pub base_currency: &'a str,
}

impl TaskInput<'_> {
    fn located(&self) -> &Value {
        self.collected.payload(ToolName::SearchDestination)
    }

    /// 定位结果中的国家名，缺失时退回目的地原文
    pub fn country_or_destination(&self) -> String {
        self.located()["country"]
            .as_str()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(self.destination)
            .to_string()
    }

    pub fn country_code(&self) -> Option<String> {
        self.located()["countryCode"]
            .as_str()
            .or_else(|| {
                self.collected.payload(ToolName::GetCountryInfo)["countryCode"].as_str()
            })
            .map(str::to_string)
    }

    pub fn lat(&self) -> Option<f64> {
        self.located()["coordinates"]["lat"].as_f64()
    }

    pub fn lon(&self) -> Option<f64> {
        self.located()["coordinates"]["lng"].as_f64()
    }

    pub fn local_currency(&self) -> Option<String> {
        self.collected.payload(ToolName::GetCountryInfo)["currency"]["code"]
            .as_str()
            .map(str::to_string)
    }
}

pub type ArgsBuilder = fn(&TaskInput<'_>) -> Value;

/// 一次计划内的工具调用
#[derive(Clone, Copy)]
pub struct ResearchTask {
    pub tool: ToolName,
    pub step_index: usize,
    pub build_args: ArgsBuilder,
}

impl std::fmt::Debug for ResearchTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResearchTask")
            .field("tool", &self.tool)
            .field("step_index", &self.step_index)
            .finish()
    }
}

pub static TASKS: &[ResearchTask] = &[
    ResearchTask {
        tool: ToolName::SearchDestination,
        step_index: 1,
        build_args: |input| json!({ "destination": input.destination }),
    },
    ResearchTask {
        tool: ToolName::GetCountryInfo,
        step_index: 1,
        build_args: |input| {
            json!({
                "country": input.country_or_destination(),
                "countryCode": input.country_code(),
            })
        },
    },
    ResearchTask {
        tool: ToolName::GetCityInfo,
        step_index: 2,
        build_args: |input| {
            json!({
                "destination": input.destination,
                "limit": 8,
                "countryCode": input.country_code(),
            })
        },
    },
    ResearchTask {
        tool: ToolName::SearchAttractions,
        step_index: 3,
        build_args: |input| {
            json!({
                "destination": input.destination,
                "type": "all",
                "limit": 15,
                "lat": input.lat(),
                "lon": input.lon(),
            })
        },
    },
    ResearchTask {
        tool: ToolName::GetNeighborhoods,
        step_index: 4,
        build_args: |input| {
            json!({
                "city": input.destination,
                "limit": 8,
                "lat": input.lat(),
                "lon": input.lon(),
            })
        },
    },
    ResearchTask {
        tool: ToolName::GetBudgetInfo,
        step_index: 5,
        build_args: |input| {
            json!({
                "destination": input.destination,
                "baseCurrency": input.base_currency,
                "currency": input.local_currency(),
                "countryCode": input.country_code(),
            })
        },
    },
    ResearchTask {
        tool: ToolName::GetWeather,
        step_index: 5,
        build_args: |input| {
            json!({
                "destination": input.destination,
                "lat": input.lat(),
                "lon": input.lon(),
                "countryCode": input.country_code(),
            })
        },
    },
    ResearchTask {
        tool: ToolName::GetTransportation,
        step_index: 6,
        build_args: |input| {
            json!({
                "destination": input.destination,
                "lat": input.lat(),
                "lon": input.lon(),
                "countryCode": input.country_code(),
            })
        },
    },
    ResearchTask {
        tool: ToolName::GetSafetyInfo,
        step_index: 7,
        build_args: |input| {
            json!({
                "destination": input.country_or_destination(),
                "countryCode": input.country_code(),
            })
        },
    },
    ResearchTask {
        tool: ToolName::GetCultureInfo,
        step_index: 8,
        build_args: |input| {
            json!({
                "destination": input.destination,
                "countryCode": input.country_code(),
            })
        },
    },
    ResearchTask {
        tool: ToolName::GetLocalTips,
        step_index: 9,
        build_args: |input| {
            json!({
                "destination": input.destination,
                "countryCode": input.country_code(),
            })
        },
    },
    ResearchTask {
        tool: ToolName::SearchImages,
        step_index: 10,
        build_args: |input| {
            json!({
                "query": format!("{} travel landmarks tourism", input.destination),
                "count": 15,
            })
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tasks_cover_every_tool_in_step_order() {
        assert_eq!(TASKS.len(), ToolName::ALL.len());
        for tool in ToolName::ALL {
            assert!(TASKS.iter().any(|t| t.tool == tool), "missing {}", tool);
        }
        assert!(TASKS.windows(2).all(|w| w[0].step_index <= w[1].step_index));
        assert!(TASKS.iter().all(|t| t.step_index > 0 && t.step_index < STEPS.len() - 1));
    }

    #[test]
    fn test_args_fall_back_to_destination_without_prior_results() {
        let collected = CollectedData::new();
        let input = TaskInput {
            destination: "Nowhereland123",
            collected: &collected,
            base_currency: "USD",
        };

        let safety = TASKS
            .iter()
            .find(|t| t.tool == ToolName::GetSafetyInfo)
            .unwrap();
        let args = (safety.build_args)(&input);
        assert_eq!(args["destination"], json!("Nowhereland123"));
        assert!(args["countryCode"].is_null());
    }

    #[test]
    fn test_args_read_prior_results() {
        let mut collected = CollectedData::new();
        collected.store(
            ToolName::SearchDestination,
            json!({
                "country": "Japan",
                "countryCode": "JP",
                "coordinates": { "lat": 35.0116, "lng": 135.7681 }
            }),
        );
        collected.store(
            ToolName::GetCountryInfo,
            json!({ "currency": { "code": "JPY" } }),
        );
        let input = TaskInput {
            destination: "Kyoto",
            collected: &collected,
            base_currency: "EUR",
        };

        let country = (TASKS[1].build_args)(&input);
        assert_eq!(country["country"], json!("Japan"));

        let budget = TASKS
            .iter()
            .find(|t| t.tool == ToolName::GetBudgetInfo)
            .unwrap();
        let args = (budget.build_args)(&input);
        assert_eq!(args["currency"], json!("JPY"));
        assert_eq!(args["baseCurrency"], json!("EUR"));
        assert_eq!(args["countryCode"], json!("JP"));

        let attractions = (TASKS[3].build_args)(&input);
        assert_eq!(attractions["lat"], json!(35.0116));
        assert_eq!(attractions["lon"], json!(135.7681));
    }

    #[test]
    fn test_step_lookup_is_clamped() {
        assert_eq!(research_step(0, StepStatus::Active).id, "init");
        assert_eq!(research_step(99, StepStatus::Complete).id, "synthesize");
    }
}
