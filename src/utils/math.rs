//! Numeric helpers

/// Round to the nearest integer, with exact halves rounded toward positive infinity
///
/// `f64::round` sends `-0.5` to `-1`; scores and offsets here send it to `0`.
#[must_use]
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Arithmetic mean, `None` for empty input
#[must_use]
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0_usize), |(sum, count), value| (sum + value, count + 1));
    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(66.5), 67);
        assert_eq!(round_half_up(66.49), 66);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-1.5), -1);
        assert_eq!(round_half_up(-2.6), -3);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean([20.0, 40.0, 60.0]), Some(40.0));
        assert_eq!(mean(Vec::<f64>::new()), None);
    }
}
