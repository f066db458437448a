// Whole US dollars with comma grouping; halves round away from zero.
pub fn usd(value: f64) -> String {
    if !value.is_finite() {
        return format!("${value}");
    }

    let negative = value < 0.0;
    let whole = value.abs().round();
    let digits = format!("{whole:.0}");
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
