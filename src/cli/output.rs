//! Output formatting helpers for CLI

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print a histogram row with a proportional bar
pub fn print_bar(label: &str, count: usize, max_count: usize) {
    const BAR_WIDTH: usize = 40;
    let filled = if max_count == 0 {
        0
    } else {
        (count * BAR_WIDTH).div_ceil(max_count)
    };
    println!("  {label:>6} {:>8} {}", format_number(count), "#".repeat(filled));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_number_inserts_separators() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(26_242), "26,242");
        assert_eq!(format_number(1_000_000), "1,000,000");
    }
}
