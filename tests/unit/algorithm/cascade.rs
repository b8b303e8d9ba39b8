//! Tests for sequencing lattice stages and observer notifications

#[cfg(test)]
mod tests {
    use burg2d::algorithm::cascade::{Cascade, CascadeObserver};
    use burg2d::algorithm::direction::Direction;
    use burg2d::algorithm::lattice::{OrderReport, Prediction, predict};
    use ndarray::Array2;

    fn ramp(n1: usize, n2: usize) -> Array2<f64> {
        Array2::from_shape_fn((n2, n1), |(i2, i1)| {
            ((i1 * 7 + i2 * 3) % 11) as f64 - 5.0
        })
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl CascadeObserver<f64> for Recorder {
        fn stage_started(&mut self, stage: usize, direction: Direction, order: usize) {
            self.events.push(format!("start {stage} {direction} {order}"));
        }

        fn order_completed(&mut self, stage: usize, report: &OrderReport<f64>) {
            self.events.push(format!("order {stage} {}", report.step.order));
        }

        fn stage_completed(&mut self, stage: usize, prediction: &Prediction<f64>) {
            self.events.push(format!("done {stage} {}", prediction.order()));
        }
    }

    // Tests the default cascade runs north-west then south-west
    #[test]
    fn test_default_directions() {
        let cascade = Cascade::new(3);
        assert_eq!(cascade.order(), 3);
        assert_eq!(
            cascade.directions(),
            &[Direction::NorthWest, Direction::SouthWest]
        );
    }

    // Tests that the second stage consumes the first stage's forward error
    #[test]
    fn test_second_stage_filters_first_output() {
        let x = ramp(8, 6);
        let result = Cascade::new(2).apply(&x.view()).expect("valid field");

        let f1 = predict(&x.view(), 2, Direction::NorthWest).expect("valid field");
        let f4 = predict(&f1.forward().view(), 2, Direction::SouthWest).expect("valid field");

        assert_eq!(result.input(), &x);
        assert_eq!(result.stages().len(), 2);
        assert_eq!(result.stages()[0].forward(), f1.forward());
        assert_eq!(result.stages()[1].forward(), f4.forward());
        assert_eq!(result.stages()[1].coefficients(), f4.coefficients());
        assert_eq!(result.output(), f4.forward());
    }

    // Tests observer events arrive in stage and order sequence
    #[test]
    fn test_observer_sequence() {
        let x = ramp(5, 5);
        let mut recorder = Recorder::default();
        Cascade::new(2)
            .apply_observed(&x.view(), &mut recorder)
            .expect("valid field");

        assert_eq!(
            recorder.events,
            vec![
                "start 0 north-west 2",
                "order 0 0",
                "order 0 1",
                "done 0 2",
                "start 1 south-west 2",
                "order 1 0",
                "order 1 1",
                "done 1 2",
            ]
        );
    }

    // Tests that a cascade without stages returns its input
    #[test]
    fn test_empty_cascade_passes_through() {
        let x = ramp(4, 3);
        let result = Cascade::with_directions(5, Vec::new())
            .apply(&x.view())
            .expect("valid field");
        assert!(result.stages().is_empty());
        assert_eq!(result.output(), &x);
    }

    // Tests that custom stage lists run in the given order
    #[test]
    fn test_custom_directions() {
        let x = ramp(6, 6);
        let result = Cascade::with_directions(1, vec![Direction::SouthWest, Direction::SouthWest])
            .apply(&x.view())
            .expect("valid field");
        let directions: Vec<Direction> = result.stages().iter().map(Prediction::direction).collect();
        assert_eq!(directions, vec![Direction::SouthWest, Direction::SouthWest]);
    }

    // Tests that malformed input fails before any stage starts
    #[test]
    fn test_empty_field_rejected() {
        let x = Array2::<f64>::zeros((3, 0));
        let mut recorder = Recorder::default();
        assert!(Cascade::new(2).apply_observed(&x.view(), &mut recorder).is_err());
        assert!(recorder.events.is_empty());
    }
}
