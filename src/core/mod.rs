pub mod engine;
pub mod input;
pub mod presets;
pub mod report;

use crate::config::Config;
use crate::core::engine::{ResultRecord, SensitivityPoint};
use crate::core::input::{NumericInputs, RawInputs};
use anyhow::{Result, bail};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub inputs: NumericInputs,
    pub result: ResultRecord,
    pub sensitivity: Vec<SensitivityPoint>,
    pub max_abs_roi: f64,
}

#[derive(Debug, Clone, Default)]
pub struct InputOverrides {
    pub baseline_revenue: Option<String>,
    pub uplift_pct: Option<String>,
    pub bonus_cost: Option<String>,
    pub churn_pct: Option<String>,
}

impl InputOverrides {
    pub fn is_empty(&self) -> bool {
        self.baseline_revenue.is_none()
            && self.uplift_pct.is_none()
            && self.bonus_cost.is_none()
            && self.churn_pct.is_none()
    }

    fn apply(&self, raw: &mut RawInputs) {
        let fields = [
            (&self.baseline_revenue, &mut raw.baseline_revenue),
            (&self.uplift_pct, &mut raw.uplift_pct),
            (&self.bonus_cost, &mut raw.bonus_cost),
            (&self.churn_pct, &mut raw.churn_pct),
        ];

        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value.clone();
            }
        }
    }
}

pub fn evaluate(name: Option<&str>, raw: &RawInputs) -> Evaluation {
    let inputs = raw.coerce();
    debug!(?raw, ?inputs, "coerced inputs");

    let result = engine::compute_result(&inputs);
    let sensitivity = engine::compute_sensitivity(&inputs);
    let max_abs_roi = engine::max_abs_roi(&sensitivity);

    Evaluation {
        name: name.map(str::to_string),
        inputs,
        result,
        sensitivity,
        max_abs_roi,
    }
}

// Config defaults, then the named scenario, then individual overrides.
pub fn resolve_inputs(
    cfg: &Config,
    scenario: Option<&str>,
    overrides: &InputOverrides,
) -> Result<RawInputs> {
    let mut raw = match scenario {
        Some(name) => match presets::find_preset(name, &cfg.scenarios) {
            Some(preset) => preset.inputs,
            None => bail!(
                "unknown scenario '{}' (available: {})",
                name,
                available_names(cfg)
            ),
        },
        None => cfg.inputs.clone(),
    };

    overrides.apply(&mut raw);
    Ok(raw)
}

pub fn evaluate_scenarios(cfg: &Config, names: &[String]) -> Result<Vec<Evaluation>> {
    if names.is_empty() {
        return Ok(presets::all_presets(&cfg.scenarios)
            .iter()
            .map(|preset| evaluate(Some(preset.name.as_str()), &preset.inputs))
            .collect());
    }

    names
        .iter()
        .map(|name| {
            let raw = resolve_inputs(cfg, Some(name.as_str()), &InputOverrides::default())?;
            Ok(evaluate(Some(name.as_str()), &raw))
        })
        .collect()
}

fn available_names(cfg: &Config) -> String {
    presets::all_presets(&cfg.scenarios)
        .iter()
        .map(|preset| preset.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
