/// Format an amount with a currency symbol, two decimals and thousands
/// separators: `₹1,234.56`, `-₹12.00`.
pub fn currency(val: f64, symbol: &str) -> String {
    if !val.is_finite() {
        return format!("{symbol}{val}");
    }
    let negative = val < 0.0;
    let fixed = format!("{:.2}", val.abs());
    let (int_part, dec_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    // "-0.00" after rounding is still zero
    if negative && fixed != "0.00" {
        format!("-{symbol}{grouped}.{dec_part}")
    } else {
        format!("{symbol}{grouped}.{dec_part}")
    }
}
