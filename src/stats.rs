use crate::error::{Error, Result};

/// Median of a price list.
///
/// Prices are sorted ascending; for an even count the median is the average
/// of the two middle elements, for an odd count it is the middle element.
pub fn median(prices: &[f64]) -> Result<f64> {
    if prices.is_empty() {
        return Err(Error::InsufficientData);
    }

    let mut sorted = prices.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    if n % 2 == 0 {
        let mid = n / 2;
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[n / 2])
    }
}
