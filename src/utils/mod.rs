//! Common utilities and helpers

pub mod path;

/// Utility functions for djiutil
pub struct Utils;

impl Utils {
    /// Format file size for display: `B`, `K`, `M`, `G`, `T` in steps of 1024.
    ///
    /// One decimal is kept below 10 units and always for gigabytes, so card
    /// sized files stay readable (`512B`, `3.4M`, `127M`, `1.2G`).
    pub fn format_file_size(size: u64) -> String {
        let mut size = size as f64;
        for unit in ["B", "K", "M", "G"] {
            if size < 1024.0 {
                let precision = if unit == "G" || size < 10.0 { 1 } else { 0 };
                return format!("{:3.*}{}", precision, size, unit);
            }
            size /= 1024.0;
        }
        format!("{:.1}T", size)
    }

    /// Group decimal digits in threes: `1234567` becomes `1,234,567`
    pub fn format_thousands(value: u64) -> String {
        let digits = value.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(digit);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(Utils::format_file_size(0), "0.0B");
        assert_eq!(Utils::format_file_size(512), "512B");
        assert_eq!(Utils::format_file_size(2048), "2.0K");
        assert_eq!(Utils::format_file_size(150 * 1024), "150K");
        assert_eq!(Utils::format_file_size(3 * 1024 * 1024 + 400 * 1024), "3.4M");
        assert_eq!(Utils::format_file_size(1288490189), "1.2G");
        assert_eq!(Utils::format_file_size(2 * 1024 * 1024 * 1024 * 1024), "2.0T");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(Utils::format_thousands(0), "0");
        assert_eq!(Utils::format_thousands(999), "999");
        assert_eq!(Utils::format_thousands(1000), "1,000");
        assert_eq!(Utils::format_thousands(123456), "123,456");
        assert_eq!(Utils::format_thousands(u64::MAX), "18,446,744,073,709,551,615");
    }
}
