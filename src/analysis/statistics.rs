//! Sample-value statistics for region quality reporting.

/// Summary statistics over a slice of byte samples.
#[derive(Debug, Clone)]
pub struct RegionStats {
    /// Mean sample value.
    pub mean: f64,
    /// Population variance of sample values.
    pub variance: f64,
    /// Shannon entropy of the 256-bin value histogram, in bits per byte.
    pub entropy: f64,
    /// Number of samples analyzed.
    pub sample_size: usize,
}

impl RegionStats {
    /// Computes all statistics over the given samples.
    pub fn analyze(data: &[u8]) -> Self {
        Self {
            mean: Self::compute_mean(data),
            variance: Self::variance_of(data),
            entropy: Self::compute_entropy(data),
            sample_size: data.len(),
        }
    }

    fn compute_mean(data: &[u8]) -> f64 {
        if data.is_empty() {
            return 0.0;
        }
        data.iter().map(|&b| b as f64).sum::<f64>() / data.len() as f64
    }

    /// Computes the population variance of byte values.
    ///
    /// Also used by the region locator to score candidate blocks.
    pub fn variance_of(data: &[u8]) -> f64 {
        if data.is_empty() {
            return 0.0;
        }

        let n = data.len() as f64;
        let mean: f64 = data.iter().map(|&b| b as f64).sum::<f64>() / n;
        data.iter().map(|&b| (b as f64 - mean).powi(2)).sum::<f64>() / n
    }

    /// Computes Shannon entropy over the byte-value histogram.
    ///
    /// Ranges from 0.0 (constant data) to 8.0 (perfectly uniform).
    fn compute_entropy(data: &[u8]) -> f64 {
        if data.is_empty() {
            return 0.0;
        }

        let mut histogram = [0usize; 256];
        for &b in data {
            histogram[b as usize] += 1;
        }

        let n = data.len() as f64;
        histogram
            .iter()
            .filter(|&&count| count > 0)
            .map(|&count| {
                let p = count as f64 / n;
                -p * p.log2()
            })
            .sum()
    }
}
