//! Sample statistics shared by the aggregation stages.

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sum of squared deviations from the sample mean.
pub fn sum_of_squares(values: &[f64]) -> f64 {
    let mean = mean(values);
    values.iter().map(|v| (v - mean) * (v - mean)).sum()
}

/// Unbiased standard deviation given a group's sum of squares and size.
/// Groups with fewer than two samples have no spread.
pub fn std_from_sum_of_squares(sum_of_squares: f64, count: u32) -> f64 {
    if count < 2 {
        return 0.0;
    }
    (sum_of_squares / (count - 1) as f64).sqrt()
}

/// Unbiased (n - 1) sample standard deviation.
pub fn sample_std(values: &[f64]) -> f64 {
    std_from_sum_of_squares(sum_of_squares(values), values.len() as u32)
}

/// Pooled standard deviation of several groups, each given as
/// `(count, sum_of_squares)`.
///
/// The sums of squares are added up and divided by the combined degrees of
/// freedom; averaging the groups' standard deviations would weigh a two-match
/// group like a twenty-match one.
pub fn pooled_std<I>(groups: I) -> f64
where
    I: IntoIterator<Item = (u32, f64)>,
{
    let (count, sum_of_squares) = groups
        .into_iter()
        .fold((0u32, 0.0f64), |(n, ss), (gn, gss)| (n + gn, ss + gss));
    std_from_sum_of_squares(sum_of_squares, count)
}
