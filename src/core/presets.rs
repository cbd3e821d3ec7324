use crate::core::input::RawInputs;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preset {
    pub name: String,
    pub description: String,
    pub inputs: RawInputs,
}

impl Preset {
    pub fn new(name: &str, description: &str, inputs: RawInputs) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            inputs,
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(name.trim())
    }
}

pub fn builtin_presets() -> Vec<Preset> {
    vec![
        Preset::new(
            "conservative",
            "low uplift with heavier churn drag",
            RawInputs::new("120000", "4", "15000", "-3"),
        ),
        Preset::new(
            "expected",
            "baseline planning assumptions",
            RawInputs::default(),
        ),
        Preset::new(
            "aggressive",
            "strong uplift with mild churn",
            RawInputs::new("120000", "14", "15000", "-1"),
        ),
    ]
}

pub fn all_presets(user_scenarios: &[Preset]) -> Vec<Preset> {
    let mut presets = builtin_presets();

    for scenario in user_scenarios {
        match presets.iter_mut().find(|preset| preset.matches(&scenario.name)) {
            Some(existing) => *existing = scenario.clone(),
            None => presets.push(scenario.clone()),
        }
    }

    presets
}

pub fn find_preset(name: &str, user_scenarios: &[Preset]) -> Option<Preset> {
    user_scenarios
        .iter()
        .find(|scenario| scenario.matches(name))
        .cloned()
        .or_else(|| {
            builtin_presets()
                .into_iter()
                .find(|preset| preset.matches(name))
        })
}
