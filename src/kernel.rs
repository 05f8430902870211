
use crate::density::{evaluate_density, validate_sigma};
use crate::errors::*;
use crate::sample::{self, Sample, RADIUS, SAMPLES};

/// A labelled kernel value (raw density or normalized weight).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Weight {
    pub label: &'static str,
    pub value: f64,
}

/// Evaluates the density at each sample's offset, preserving sample order.
///
/// Sigma is validated once up front, so an invalid sigma fails before any
/// density is evaluated.
pub fn compute_raw_table(sigma: f64, samples: &[Sample]) -> Result<Vec<Weight>> {
    validate_sigma(sigma)?;

    samples.iter().map(|s| {
        let value = evaluate_density(sigma, s.offset)?;
        debug!("raw {} = {}", s.label, value);
        Ok(Weight { label: s.label, value })
    }).collect()
}

/// Divides each raw value by the multiplicity-weighted sum of all raw values.
pub fn normalize(raw: &[Weight], multiplicities: &[u32]) -> Result<Vec<Weight>> {
    let constant = normalization_constant(raw, multiplicities)?;
    normalize_by(raw, constant)
}

fn normalize_by(raw: &[Weight], constant: f64) -> Result<Vec<Weight>> {
    if !(constant > 0.0) || !constant.is_finite() {
        bail!(ErrorKind::DegenerateNormalization(constant));
    }
    info!("normalization constant = {}", constant);

    Ok(raw.iter().map(|w| {
        let value = w.value / constant;
        debug!("normalized {} = {}", w.label, value);
        Weight { label: w.label, value }
    }).collect())
}

/// Sum of `raw[i] * multiplicities[i]`.
pub fn normalization_constant(raw: &[Weight], multiplicities: &[u32]) -> Result<f64> {
    if raw.len() != multiplicities.len() {
        bail!(ErrorKind::TableMismatch(raw.len(), multiplicities.len()));
    }
    Ok(raw.iter()
       .zip(multiplicities)
       .map(|(w, &m)| w.value * m as f64)
       .sum())
}

/// The computed kernel: both tables plus the constant that links them.
#[derive(Debug, Clone, Serialize)]
pub struct Kernel {
    pub sigma: f64,
    pub normalization_constant: f64,
    pub raw: Vec<Weight>,
    pub normalized: Vec<Weight>,
}

impl Kernel {
    pub fn new(sigma: f64) -> Result<Kernel> {
        let raw = compute_raw_table(sigma, &SAMPLES)?;
        let normalization_constant = normalization_constant(&raw, &sample::multiplicities())?;
        let normalized = normalize_by(&raw, normalization_constant)?;

        Ok(Kernel {
            sigma,
            normalization_constant,
            raw,
            normalized,
        })
    }

    /// Normalized weight of the cell at `(dx, dy)`; None outside the 5x5 window.
    pub fn weight_at(&self, dx: i32, dy: i32) -> Option<f64> {
        sample::classify(dx, dy)
            .and_then(|i| self.normalized.get(i))
            .map(|w| w.value)
    }

    /// The full neighborhood, indexed `[dy + RADIUS][dx + RADIUS]`.
    pub fn grid(&self) -> [[f64; 5]; 5] {
        let mut grid = [[0.0; 5]; 5];
        for (row, dy) in grid.iter_mut().zip(-RADIUS..=RADIUS) {
            for (cell, dx) in row.iter_mut().zip(-RADIUS..=RADIUS) {
                *cell = self.weight_at(dx, dy).unwrap_or(0.0);
            }
        }
        grid
    }

    /// Normalized weights summed with their multiplicities. Should be 1.
    pub fn total_weight(&self) -> f64 {
        self.normalized.iter()
            .zip(SAMPLES.iter())
            .map(|(w, s)| w.value * s.multiplicity as f64)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_run() {
        let k = Kernel::new(15.0).unwrap();
        assert!((k.raw[5].value - 0.0007073553).abs() < 1e-10);
        assert!(k.normalized[5].value > k.normalized[0].value);
        assert!((k.total_weight() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn matches_hardcoded_blur_weights() {
        // f32 constants derived from sigma = 15
        let expected = [0.0396455, 0.0399107, 0.0399994, 0.0401776, 0.0402670, 0.0403566];
        let k = Kernel::new(15.0).unwrap();
        for (w, e) in k.normalized.iter().zip(expected.iter()) {
            assert!((w.value - e).abs() < 1e-6, "{}: {} vs {}", w.label, w.value, e);
        }
    }

    #[test]
    fn invalid_sigma_fails_first() {
        match compute_raw_table(0.0, &SAMPLES) {
            Err(Error(ErrorKind::InvalidSigma(s), _)) => assert_eq!(s, 0.0),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn zero_raw_values_are_degenerate() {
        let raw: Vec<Weight> = SAMPLES.iter()
            .map(|s| Weight { label: s.label, value: 0.0 })
            .collect();
        match normalize(&raw, &sample::multiplicities()) {
            Err(Error(ErrorKind::DegenerateNormalization(c), _)) => assert_eq!(c, 0.0),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn length_mismatch() {
        let raw = compute_raw_table(1.0, &SAMPLES).unwrap();
        match normalize(&raw, &[4, 8, 4]) {
            Err(Error(ErrorKind::TableMismatch(6, 3), _)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn grid_sums_to_one() {
        let k = Kernel::new(0.8).unwrap();
        let g = k.grid();
        let sum: f64 = g.iter().flat_map(|r| r.iter()).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert_eq!(g[2][2], k.normalized[5].value);
        assert_eq!(g[0][4], k.normalized[0].value);
        assert_eq!(k.weight_at(3, 0), None);
    }

    #[test]
    fn weight_at_far_offsets_and_short_tables() {
        let k = Kernel::new(15.0).unwrap();
        assert_eq!(k.weight_at(0, i32::MIN), None);
        assert_eq!(k.weight_at(i32::MIN, i32::MAX), None);

        let short = Kernel { normalized: k.normalized[..2].to_vec(), ..k.clone() };
        assert_eq!(short.weight_at(-2, -2), Some(k.normalized[0].value));
        assert_eq!(short.weight_at(0, 0), None);
    }

    #[test]
    fn stored_constant_links_both_tables() {
        let k = Kernel::new(1.6).unwrap();
        let expected = normalization_constant(&k.raw, &sample::multiplicities()).unwrap();
        assert_eq!(k.normalization_constant, expected);
        for (r, n) in k.raw.iter().zip(k.normalized.iter()) {
            assert_eq!(n.value, r.value / k.normalization_constant);
        }
    }
}
