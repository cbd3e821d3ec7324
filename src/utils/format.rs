use crate::core::engine::ResultRecord;

pub const NOT_APPLICABLE: &str = "N/A";

pub fn currency(value: f64, symbol: &str) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{sign}{symbol}{}", group_thousands(&digits))
}

pub fn percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}

// A non-positive bonus cost always shows 0.0%.
pub fn roi(result: &ResultRecord) -> String {
    if result.has_roi() {
        percent(result.roi, 1)
    } else {
        percent(0.0, 1)
    }
}

pub fn payback(result: &ResultRecord) -> String {
    match result.payback_months() {
        Some(months) => format!("{months:.2}"),
        None => NOT_APPLICABLE.to_string(),
    }
}

pub fn bar_width(roi: f64, scale: f64, full_width: usize, min_width: usize) -> usize {
    if scale <= 0.0 {
        return min_width;
    }

    let width = (roi.abs() / scale * full_width as f64).round() as usize;
    width.clamp(min_width, full_width.max(min_width))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
