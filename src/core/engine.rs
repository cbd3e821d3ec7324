use crate::core::input::NumericInputs;
use serde::Serialize;

pub const SENSITIVITY_DELTAS: [f64; 5] = [-6.0, -3.0, 0.0, 3.0, 6.0];

pub const MIN_ROI_SCALE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResultRecord {
    pub baseline_revenue: f64,
    pub uplift_revenue: f64,
    pub churn_impact: f64,
    pub bonus_cost: f64,
    pub net_impact: f64,
    pub roi: f64,
    pub payback: f64,
}

impl ResultRecord {
    pub fn recurring_gain(&self) -> f64 {
        self.uplift_revenue + self.churn_impact
    }

    /// `None` when the promotion never pays back; `payback` is 0 in that case.
    pub fn payback_months(&self) -> Option<f64> {
        if self.recurring_gain() > 0.0 {
            Some(self.payback)
        } else {
            None
        }
    }

    pub fn has_roi(&self) -> bool {
        self.bonus_cost > 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensitivityPoint {
    pub label: String,
    pub uplift_pct: f64,
    pub roi: f64,
}

pub fn compute_result(inputs: &NumericInputs) -> ResultRecord {
    let uplift_revenue = percent_of(inputs.baseline_revenue, inputs.uplift_pct);
    let churn_impact = percent_of(inputs.baseline_revenue, inputs.churn_pct);
    let net_impact = uplift_revenue + churn_impact - inputs.bonus_cost;
    let recurring = uplift_revenue + churn_impact;

    let payback = if recurring > 0.0 {
        inputs.bonus_cost / recurring
    } else {
        0.0
    };

    ResultRecord {
        baseline_revenue: inputs.baseline_revenue,
        uplift_revenue,
        churn_impact,
        bonus_cost: inputs.bonus_cost,
        net_impact,
        roi: roi_for(net_impact, inputs.bonus_cost),
        payback,
    }
}

pub fn compute_sensitivity(inputs: &NumericInputs) -> Vec<SensitivityPoint> {
    let churn_impact = percent_of(inputs.baseline_revenue, inputs.churn_pct);

    SENSITIVITY_DELTAS
        .iter()
        .map(|delta| {
            let uplift_pct = inputs.uplift_pct + delta;
            let uplift_revenue = percent_of(inputs.baseline_revenue, uplift_pct);
            let net_impact = uplift_revenue + churn_impact - inputs.bonus_cost;

            SensitivityPoint {
                label: percent_label(uplift_pct),
                uplift_pct,
                roi: roi_for(net_impact, inputs.bonus_cost),
            }
        })
        .collect()
}

pub fn max_abs_roi(points: &[SensitivityPoint]) -> f64 {
    points
        .iter()
        .map(|point| point.roi.abs())
        .fold(MIN_ROI_SCALE, f64::max)
}

fn percent_of(base: f64, pct: f64) -> f64 {
    base * pct / 100.0
}

fn roi_for(net_impact: f64, bonus_cost: f64) -> f64 {
    if bonus_cost > 0.0 {
        net_impact / bonus_cost * 100.0
    } else {
        0.0
    }
}

// Ties round away from zero; adding 0.0 folds -0 into 0 so labels never read "-0%".
fn percent_label(pct: f64) -> String {
    format!("{}%", pct.round() + 0.0)
}
