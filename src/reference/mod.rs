//! 静态参考数据：按 ISO 3166-1 alpha-2 代码索引的国家档案
//!
//! 在线风险评估或生活成本接口数据稀疏时，工具会用这里的档案补全负载。
//! 表在首次访问时构建一次，之后只读。

use std::collections::HashMap;
use std::sync::LazyLock;

mod profiles;

/// 预算档位的每日花费（美元）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyRange {
    pub min: u32,
    pub max: u32,
}

/// 三档文本：经济 / 中档 / 豪华
pub type Tiers = [&'static str; 3];

#[derive(Debug)]
pub struct CostProfile {
    pub budget: DailyRange,
    pub mid_range: DailyRange,
    pub luxury: DailyRange,
    pub accommodation: Tiers,
    pub food: Tiers,
    pub transport: Tiers,
    pub activities: Tiers,
    pub tips: &'static [&'static str],
    pub tipping: &'static str,
}

#[derive(Debug)]
pub struct EtiquetteProfile {
    pub summary: &'static str,
    pub etiquette: &'static [&'static str],
    pub dress: &'static str,
    pub greetings: &'static str,
    pub taboos: &'static [&'static str],
    pub customs: &'static [&'static str],
}

#[derive(Debug)]
pub struct SafetyProfile {
    /// 评级标签，取值与指南的安全等级一致
    pub rating: &'static str,
    pub summary: &'static str,
    pub concerns: &'static [&'static str],
    pub tips: &'static [&'static str],
    pub police: &'static str,
    pub ambulance: &'static str,
    pub tourist: &'static str,
    pub health: &'static [&'static str],
}

#[derive(Debug)]
pub struct TransportProfile {
    pub public_transport: &'static str,
    pub taxis: &'static str,
    pub rentals: &'static str,
    pub walking: &'static str,
    pub intercity: &'static [&'static str],
    pub recommendation: &'static str,
}

#[derive(Debug)]
pub struct Mistake {
    pub mistake: &'static str,
    pub why: &'static str,
    pub instead: &'static str,
}

#[derive(Debug)]
pub struct TravelerFit {
    pub kind: &'static str,
    pub why: &'static str,
    pub highlights: &'static [&'static str],
}

/// 单个国家的完整档案
#[derive(Debug)]
pub struct CountryProfile {
    pub code: &'static str,
    pub name: &'static str,
    pub theme: &'static str,
    pub best_time: &'static str,
    pub visa_info: &'static str,
    pub cost: CostProfile,
    pub culture: EtiquetteProfile,
    pub safety: SafetyProfile,
    pub transport: TransportProfile,
    pub mistakes: &'static [Mistake],
    pub best_for: &'static [TravelerFit],
}

static PROFILES: LazyLock<HashMap<&'static str, &'static CountryProfile>> = LazyLock::new(|| {
    profiles::ALL
        .iter()
        .map(|profile| (profile.code, profile))
        .collect()
});

/// 名称（国家与主要城市，小写）→ 国家代码
const NAME_INDEX: &[(&str, &str)] = &[
    ("japan", "JP"),
    ("tokyo", "JP"),
    ("kyoto", "JP"),
    ("osaka", "JP"),
    ("morocco", "MA"),
    ("marrakech", "MA"),
    ("marrakesh", "MA"),
    ("fes", "MA"),
    ("fez", "MA"),
    ("casablanca", "MA"),
    ("chefchaouen", "MA"),
    ("france", "FR"),
    ("paris", "FR"),
    ("nice", "FR"),
    ("lyon", "FR"),
    ("italy", "IT"),
    ("rome", "IT"),
    ("venice", "IT"),
    ("florence", "IT"),
    ("milan", "IT"),
    ("thailand", "TH"),
    ("bangkok", "TH"),
    ("phuket", "TH"),
    ("chiang mai", "TH"),
    ("spain", "ES"),
    ("barcelona", "ES"),
    ("madrid", "ES"),
    ("seville", "ES"),
    ("mexico", "MX"),
    ("mexico city", "MX"),
    ("cancun", "MX"),
    ("oaxaca", "MX"),
    ("india", "IN"),
    ("delhi", "IN"),
    ("new delhi", "IN"),
    ("mumbai", "IN"),
    ("jaipur", "IN"),
];

/// 目的地 → 主题键
const THEME_INDEX: &[(&str, &str)] = &[
    ("tokyo", "japan"),
    ("kyoto", "japan"),
    ("osaka", "japan"),
    ("paris", "france"),
    ("nice", "france"),
    ("lyon", "france"),
    ("rome", "italy"),
    ("venice", "italy"),
    ("florence", "italy"),
    ("milan", "italy"),
    ("bangkok", "thailand"),
    ("phuket", "thailand"),
    ("chiang mai", "thailand"),
    ("morocco", "morocco"),
    ("marrakech", "morocco"),
    ("fez", "morocco"),
    ("greece", "greece"),
    ("athens", "greece"),
    ("santorini", "greece"),
    ("spain", "spain"),
    ("barcelona", "spain"),
    ("madrid", "spain"),
    ("portugal", "portugal"),
    ("lisbon", "portugal"),
    ("porto", "portugal"),
    ("turkey", "turkey"),
    ("istanbul", "turkey"),
    ("egypt", "egypt"),
    ("cairo", "egypt"),
    ("india", "india"),
    ("delhi", "india"),
    ("mumbai", "india"),
    ("brazil", "brazil"),
    ("rio", "brazil"),
    ("sao paulo", "brazil"),
    ("mexico", "mexico"),
    ("mexico city", "mexico"),
    ("cancun", "mexico"),
    ("australia", "australia"),
    ("sydney", "australia"),
    ("melbourne", "australia"),
    ("new zealand", "new-zealand"),
    ("auckland", "new-zealand"),
    ("iceland", "iceland"),
    ("reykjavik", "iceland"),
    ("peru", "peru"),
    ("lima", "peru"),
    ("cusco", "peru"),
    ("vietnam", "vietnam"),
    ("hanoi", "vietnam"),
    ("ho chi minh", "vietnam"),
];

/// 档案中名称出现在目的地文本里即可命中主题
const THEMED_COUNTRIES: &[&str] = &["japan", "france", "italy", "thailand", "morocco"];

/// 按国家代码查询档案（大小写不敏感）
pub fn profile(code: &str) -> Option<&'static CountryProfile> {
    PROFILES.get(code.trim().to_uppercase().as_str()).copied()
}

/// 按国家或主要城市名称查询档案
pub fn profile_for_name(name: &str) -> Option<&'static CountryProfile> {
    let wanted = name.trim().to_lowercase();
    NAME_INDEX
        .iter()
        .find(|(alias, _)| *alias == wanted)
        .and_then(|(_, code)| profile(code))
}

/// 先按代码、再按名称查询
pub fn resolve(code: Option<&str>, name: &str) -> Option<&'static CountryProfile> {
    code.and_then(profile).or_else(|| profile_for_name(name))
}

/// 目的地对应的界面主题，未知时为 `default`
pub fn theme_for_destination(destination: &str) -> &'static str {
    let lower = destination.trim().to_lowercase();
    if lower.is_empty() {
        return "default";
    }

    if let Some(theme) = THEMED_COUNTRIES
        .iter()
        .copied()
        .find(|key| lower.contains(key))
    {
        return theme;
    }

    THEME_INDEX
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, theme)| *theme)
        .unwrap_or("default")
}

pub fn all_codes() -> impl Iterator<Item = &'static str> {
    profiles::ALL.iter().map(|profile| profile.code)
}
