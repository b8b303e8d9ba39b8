//! Tests for field construction, validation and quarter-turn reorientation

#[cfg(test)]
mod tests {
    use burg2d::BurgError;
    use burg2d::spatial::field::{
        dimensions, field_from_rows, rotate_quarter, unrotate_quarter, validate_field,
    };
    use ndarray::Array2;

    // Tests rows become the slow axis and row samples the fast axis
    #[test]
    fn test_field_from_rows_layout() {
        let field = field_from_rows(&[vec![1, 2, 3], vec![4, 5, 6]]).expect("rectangular rows");

        assert_eq!(dimensions(&field.view()), (3, 2));
        assert_eq!(field.get([1, 0]), Some(&4));
        assert_eq!(field.get([0, 2]), Some(&3));
    }

    // Tests ragged rows are reported with the offending row
    #[test]
    fn test_ragged_rows_rejected() {
        let result = field_from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0]]);
        match result {
            Err(BurgError::RaggedRows {
                row,
                expected,
                found,
            }) => {
                assert_eq!((row, expected, found), (2, 2, 1));
            }
            other => unreachable!("Expected RaggedRows, got {other:?}"),
        }
    }

    // Tests empty inputs are rejected as invalid fields
    #[test]
    fn test_empty_rows_rejected() {
        let no_rows: Vec<Vec<f64>> = Vec::new();
        assert!(matches!(
            field_from_rows(&no_rows),
            Err(BurgError::InvalidField { .. })
        ));
        assert!(matches!(
            field_from_rows(&[Vec::<f64>::new()]),
            Err(BurgError::InvalidField { .. })
        ));
    }

    // Tests zero dimensions fail validation and positive ones pass
    #[test]
    fn test_validate_field() {
        assert!(validate_field(&Array2::<f32>::zeros((0, 5)).view()).is_err());
        assert!(validate_field(&Array2::<f32>::zeros((5, 0)).view()).is_err());
        assert!(validate_field(&Array2::<f32>::zeros((1, 1)).view()).is_ok());
    }

    // Tests the quarter turn maps x[[i2, i1]] to g[[i1, n2 - 1 - i2]]
    #[test]
    fn test_rotate_quarter_mapping() {
        let field = Array2::from_shape_fn((3, 4), |(i2, i1)| 10 * i2 + i1);
        let rotated = rotate_quarter(&field.view());

        assert_eq!(rotated.dim(), (4, 3));
        for ((i2, i1), value) in field.indexed_iter() {
            assert_eq!(rotated.get([i1, 2 - i2]), Some(value));
        }
    }

    // Tests unrotating restores the original field
    #[test]
    fn test_unrotate_inverts_rotate() {
        let field = Array2::from_shape_fn((5, 2), |(i2, i1)| i2 * 2 + i1);
        let restored = unrotate_quarter(&rotate_quarter(&field.view()).view());
        assert_eq!(restored, field);
    }
}
