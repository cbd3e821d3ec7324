use crate::config::Config;
use crate::core::Evaluation;
use crate::core::engine::SensitivityPoint;
use crate::core::input::NumericInputs;
use crate::core::presets::Preset;
use crate::utils::format;
use colored::Colorize;
use serde::Serialize;

const BAR_FULL_WIDTH: usize = 30;
const BAR_MIN_WIDTH: usize = 1;

pub const ASSUMPTIONS: [&str; 4] = [
    "baseline revenue is a stable monthly run-rate",
    "uplift is attributable to the promo alone",
    "churn impact can be negative or positive",
    "bonus cost is fully accounted for in the month",
];

#[derive(Debug, Clone, Serialize)]
pub struct ExitStatus {
    pub ok: bool,
    pub reasons: Vec<String>,
}

impl ExitStatus {
    pub fn reason_line(&self) -> String {
        self.reasons.join("; ")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonResult {
    pub baseline_revenue: f64,
    pub uplift_revenue: f64,
    pub churn_impact: f64,
    pub bonus_cost: f64,
    pub net_impact: f64,
    pub roi: f64,
    pub payback_months: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    pub inputs: NumericInputs,
    pub result: JsonResult,
    pub sensitivity: Vec<SensitivityPoint>,
    pub max_abs_roi: f64,
    pub ok: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<String>,
}

impl JsonReport {
    pub fn new(evaluation: &Evaluation, exit: &ExitStatus) -> Self {
        let result = &evaluation.result;
        Self {
            scenario: evaluation.name.clone(),
            inputs: evaluation.inputs,
            result: JsonResult {
                baseline_revenue: result.baseline_revenue,
                uplift_revenue: result.uplift_revenue,
                churn_impact: result.churn_impact,
                bonus_cost: result.bonus_cost,
                net_impact: result.net_impact,
                roi: result.roi,
                payback_months: result.payback_months(),
            },
            sensitivity: evaluation.sensitivity.clone(),
            max_abs_roi: evaluation.max_abs_roi,
            ok: exit.ok,
            reasons: exit.reasons.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonComparison {
    pub scenarios: Vec<JsonReport>,
    pub ok: bool,
}

impl JsonComparison {
    pub fn new(evaluations: &[Evaluation], cfg: &Config) -> Self {
        let scenarios: Vec<JsonReport> = evaluations
            .iter()
            .map(|evaluation| JsonReport::new(evaluation, &evaluate_exit(evaluation, cfg)))
            .collect();
        let ok = scenarios.iter().all(|report| report.ok);
        Self { scenarios, ok }
    }
}

pub fn evaluate_exit(evaluation: &Evaluation, cfg: &Config) -> ExitStatus {
    let mut reasons = Vec::new();

    if let Some(min_roi) = cfg
        .general
        .min_roi
        .filter(|min_roi| evaluation.result.roi < *min_roi)
    {
        let subject = match &evaluation.name {
            Some(name) => format!("scenario {name}: roi"),
            None => "roi".to_string(),
        };
        reasons.push(format!(
            "{} {:.1}% is below min_roi {:.1}%",
            subject, evaluation.result.roi, min_roi
        ));
    }

    ExitStatus {
        ok: reasons.is_empty(),
        reasons,
    }
}

pub fn print_human(evaluation: &Evaluation, exit: &ExitStatus, cfg: &Config) {
    let symbol = cfg.general.currency_symbol.as_str();
    let result = &evaluation.result;

    match &evaluation.name {
        Some(name) => println!("{} ({})", "Promo ROI".bold(), name),
        None => println!("{}", "Promo ROI".bold()),
    }

    println!();
    println!("{}", "Inputs".bold());
    println!(
        "  baseline revenue  {}",
        format::currency(evaluation.inputs.baseline_revenue, symbol)
    );
    println!(
        "  expected uplift   {}",
        format::percent(evaluation.inputs.uplift_pct, 1)
    );
    println!(
        "  bonus cost        {}",
        format::currency(evaluation.inputs.bonus_cost, symbol)
    );
    println!(
        "  churn impact      {}",
        format::percent(evaluation.inputs.churn_pct, 1)
    );

    println!();
    println!("{}", "Snapshot".bold());
    println!(
        "  net impact        {}",
        signed(result.net_impact, format::currency(result.net_impact, symbol))
    );
    println!("  roi               {}", format::roi(result));
    println!("  payback (months)  {}", format::payback(result));

    println!();
    println!("{}", "Breakdown".bold());
    for (label, value) in [
        ("baseline revenue", result.baseline_revenue),
        ("uplift revenue", result.uplift_revenue),
        ("churn impact", result.churn_impact),
        ("bonus cost", result.bonus_cost),
    ] {
        println!("  {:<18}{}", label, format::currency(value, symbol));
    }

    println!();
    println!("{}", "ROI sensitivity (uplift ± 6%)".bold());
    for point in &evaluation.sensitivity {
        let width = format::bar_width(
            point.roi,
            evaluation.max_abs_roi,
            BAR_FULL_WIDTH,
            BAR_MIN_WIDTH,
        );
        let bar = "█".repeat(width);
        println!(
            "  {:>5}  {:>7}  {}",
            point.label,
            format!("{:.0}%", point.roi),
            signed(point.roi, bar)
        );
    }

    println!();
    println!("{}", "Assumptions".bold());
    for assumption in ASSUMPTIONS {
        println!("  - {}", assumption);
    }

    if cfg.general.min_roi.is_some() {
        println!();
        print_exit(exit);
    }
}

pub fn print_comparison(evaluations: &[Evaluation], cfg: &Config) {
    let symbol = cfg.general.currency_symbol.as_str();
    let name_width = evaluations
        .iter()
        .filter_map(|evaluation| evaluation.name.as_ref().map(String::len))
        .max()
        .unwrap_or(0)
        .max("scenario".len());

    let header = format!(
        "{:<name_width$}  {:>14}  {:>9}  {:>8}",
        "scenario", "net impact", "roi", "payback"
    );
    println!("{}", header.bold());

    for evaluation in evaluations {
        let result = &evaluation.result;
        println!(
            "{:<name_width$}  {}  {:>9}  {:>8}",
            evaluation.name.as_deref().unwrap_or("-"),
            signed(
                result.net_impact,
                format!("{:>14}", format::currency(result.net_impact, symbol))
            ),
            format::roi(result),
            format::payback(result),
        );
    }

    if cfg.general.min_roi.is_some() {
        let reasons: Vec<String> = evaluations
            .iter()
            .flat_map(|evaluation| evaluate_exit(evaluation, cfg).reasons)
            .collect();
        println!();
        print_exit(&ExitStatus {
            ok: reasons.is_empty(),
            reasons,
        });
    }
}

pub fn print_presets(presets: &[Preset]) {
    for preset in presets {
        let inputs = &preset.inputs;
        println!("{}", preset.name.bold());
        if !preset.description.is_empty() {
            println!("  {}", preset.description);
        }
        println!(
            "  baseline={} uplift={}% bonus={} churn={}%",
            inputs.baseline_revenue, inputs.uplift_pct, inputs.bonus_cost, inputs.churn_pct
        );
    }
}

fn print_exit(exit: &ExitStatus) {
    if exit.ok {
        println!("exit: OK");
    } else {
        println!("exit: FAILED ({})", exit.reason_line());
    }
}

// Escape codes count toward width specifiers; pad before calling this.
fn signed(value: f64, text: String) -> String {
    if value < 0.0 {
        text.red().to_string()
    } else {
        text.green().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;
    use crate::core::input::RawInputs;

    fn gated(min_roi: f64) -> Config {
        let mut cfg = Config::default();
        cfg.general.min_roi = Some(min_roi);
        cfg
    }

    #[test]
    fn no_gate_is_always_ok() {
        let evaluation = evaluate(None, &RawInputs::default());
        let exit = evaluate_exit(&evaluation, &Config::default());
        assert!(exit.ok);
        assert!(exit.reasons.is_empty());
    }

    #[test]
    fn gate_fails_below_min_roi() {
        let evaluation = evaluate(Some("expected"), &RawInputs::default());
        let exit = evaluate_exit(&evaluation, &gated(0.0));
        assert!(!exit.ok);
        assert_eq!(
            exit.reason_line(),
            "scenario expected: roi -52.0% is below min_roi 0.0%"
        );

        assert!(evaluate_exit(&evaluation, &gated(-60.0)).ok);
    }

    #[test]
    fn json_report_marks_missing_payback() {
        let evaluation = evaluate(None, &RawInputs::new("1000", "1", "100", "-5"));
        let exit = evaluate_exit(&evaluation, &Config::default());
        let json = serde_json::to_value(JsonReport::new(&evaluation, &exit)).expect("json");

        assert!(json["result"]["payback_months"].is_null());
        assert!(json.get("scenario").is_none());
        assert!(json.get("reasons").is_none());
        assert_eq!(json["sensitivity"].as_array().map(Vec::len), Some(5));
        assert_eq!(json["sensitivity"][0]["label"], "-5%");
    }

    #[test]
    fn comparison_ok_requires_every_scenario() {
        let evaluations = vec![
            evaluate(Some("a"), &RawInputs::new("120000", "20", "15000", "0")),
            evaluate(Some("b"), &RawInputs::default()),
        ];
        let comparison = JsonComparison::new(&evaluations, &gated(0.0));
        assert!(comparison.scenarios[0].ok);
        assert!(!comparison.scenarios[1].ok);
        assert!(!comparison.ok);
    }
}
