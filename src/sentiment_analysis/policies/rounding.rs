/// Rounds to `decimals` places on the exact binary value, ties to even
///
/// `0.625` becomes `0.62`, and `0.965` (stored as 0.96499...) becomes `0.96`.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_two_decimals() {
        assert_eq!(round_to(0.75, 2), 0.75);
        assert_eq!(round_to(2.0 / 3.0, 2), 0.67);
        assert_eq!(round_to(0.954, 2), 0.95);
    }

    #[test]
    fn test_round_to_exact_tie_goes_to_even() {
        assert_eq!(round_to(0.625, 2), 0.62);
        assert_eq!(round_to(0.375, 2), 0.38);
        assert_eq!(round_to(5.0 / 8.0, 2), 0.62);
    }

    #[test]
    fn test_round_to_uses_binary_value() {
        assert_eq!(round_to(0.965, 2), 0.96);
        assert_eq!(round_to(0.955, 2), 0.95);
    }

    #[test]
    fn test_round_to_three_decimals() {
        assert_eq!(round_to(0.55049, 3), 0.55);
        assert_eq!(round_to(0.5512, 3), 0.551);
        assert_eq!(round_to(0.99951, 3), 1.0);
        assert_eq!(round_to(0.965, 3), 0.965);
    }

    #[test]
    fn test_round_to_zero() {
        assert_eq!(round_to(0.0, 2), 0.0);
    }
}
