//! Display formatting for ruble amounts.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format an integer ruble amount with `,` thousands separators, e.g.
/// `60800` becomes `"60,800 ₽"`.
#[must_use]
pub fn format_rubles(amount: u32) -> String {
    format!("{} ₽", group_thousands(amount))
}

fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
