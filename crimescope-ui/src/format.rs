//! Display Formatting
//!
//! Small helpers for rendering numbers and timestamps.

/// Group digits with thousands separators (331002651 → "331,002,651")
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Local wall-clock time for the "updated at" label
pub fn clock_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(451), "451");
        assert_eq!(thousands(1_000), "1,000");
        assert_eq!(thousands(5_379_475), "5,379,475");
        assert_eq!(thousands(331_002_651), "331,002,651");
    }
}
