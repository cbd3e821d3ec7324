use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawInputs {
    pub baseline_revenue: String,
    pub uplift_pct: String,
    pub bonus_cost: String,
    pub churn_pct: String,
}

impl Default for RawInputs {
    fn default() -> Self {
        Self::new("120000", "8", "15000", "-2")
    }
}

impl RawInputs {
    pub fn new(
        baseline_revenue: impl Into<String>,
        uplift_pct: impl Into<String>,
        bonus_cost: impl Into<String>,
        churn_pct: impl Into<String>,
    ) -> Self {
        Self {
            baseline_revenue: baseline_revenue.into(),
            uplift_pct: uplift_pct.into(),
            bonus_cost: bonus_cost.into(),
            churn_pct: churn_pct.into(),
        }
    }

    pub fn coerce(&self) -> NumericInputs {
        NumericInputs {
            baseline_revenue: coerce(&self.baseline_revenue),
            uplift_pct: coerce(&self.uplift_pct),
            bonus_cost: coerce(&self.bonus_cost),
            churn_pct: coerce(&self.churn_pct),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericInputs {
    pub baseline_revenue: f64,
    pub uplift_pct: f64,
    pub bonus_cost: f64,
    pub churn_pct: f64,
}

/// Total over all strings: anything empty, unparsable, or non-finite becomes 0.0.
pub fn coerce(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("abc")]
    #[case("12o")]
    #[case("Infinity")]
    #[case("-inf")]
    #[case("NaN")]
    #[case("1e400")]
    #[case("1,000")]
    fn invalid_text_coerces_to_zero(#[case] raw: &str) {
        assert_eq!(coerce(raw), 0.0, "expected {raw:?} to coerce to 0");
    }

    #[rstest]
    #[case("120000", 120000.0)]
    #[case("-2", -2.0)]
    #[case("8.5", 8.5)]
    #[case(".5", 0.5)]
    #[case("+3", 3.0)]
    #[case("1e3", 1000.0)]
    #[case("  42  ", 42.0)]
    fn numeric_text_parses(#[case] raw: &str, #[case] expected: f64) {
        assert_eq!(coerce(raw), expected);
    }

    #[test]
    fn raw_inputs_coerce_field_wise() {
        let raw = RawInputs::new("100000", "oops", "", "-1");
        let numeric = raw.coerce();
        assert_eq!(numeric.baseline_revenue, 100000.0);
        assert_eq!(numeric.uplift_pct, 0.0);
        assert_eq!(numeric.bonus_cost, 0.0);
        assert_eq!(numeric.churn_pct, -1.0);
    }
}
