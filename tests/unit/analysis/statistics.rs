//! Tests for field summaries, symmetric clipping and energy ratios

#[cfg(test)]
mod tests {
    use burg2d::analysis::statistics::{FieldSummary, energy_ratio, symmetric_clip};
    use ndarray::{Array2, array};

    // Tests extremes, energy and rms of a small field
    #[test]
    fn test_summary_of_field() {
        let field = array![[1.0, -3.0], [2.0, 0.0]];
        let summary = FieldSummary::of(&field.view());

        assert_eq!(summary.min, -3.0);
        assert_eq!(summary.max, 2.0);
        assert_eq!(summary.energy, 14.0);
        assert_eq!(summary.samples, 4);
        assert!((summary.rms() - 3.5_f64.sqrt()).abs() < 1e-12);
    }

    // Tests the clip takes the larger magnitude of either extreme
    #[test]
    fn test_symmetric_clip() {
        assert_eq!(symmetric_clip(&array![[1.0, -3.0]].view()), 3.0);
        assert_eq!(symmetric_clip(&array![[4.0_f32, -0.5]].view()), 4.0);
        assert_eq!(symmetric_clip(&array![[-2.0, -1.0]].view()), 2.0);
    }

    // Tests that an empty field summarizes to zeros
    #[test]
    fn test_empty_summary() {
        let summary = FieldSummary::of(&Array2::<f64>::zeros((0, 3)).view());
        assert_eq!(summary.samples, 0);
        assert_eq!(summary.clip(), 0.0);
        assert_eq!(summary.rms(), 0.0);
    }

    // Tests energy ratio and its undefined case
    #[test]
    fn test_energy_ratio() {
        let before = array![[2.0, 0.0], [0.0, 0.0]];
        let after = array![[1.0, 0.0], [0.0, 0.0]];
        assert_eq!(energy_ratio(&before.view(), &after.view()), Some(0.25));

        let silent = Array2::<f64>::zeros((2, 2));
        assert_eq!(energy_ratio(&silent.view(), &after.view()), None);
    }
}
