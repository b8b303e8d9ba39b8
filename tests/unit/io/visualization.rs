//! Tests for the animated GIF of cascade stages

#[cfg(test)]
mod tests {
    use burg2d::BurgError;
    use burg2d::io::visualization::StageAnimation;
    use ndarray::Array2;

    // Tests frames accumulate and export as a GIF file
    #[test]
    fn test_export_gif_writes_file() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let path = dir.path().join("frames").join("cascade.gif");
        let field = Array2::from_shape_fn((4, 4), |(i2, i1)| (i2 as f32) - (i1 as f32));

        let mut animation = StageAnimation::new(2);
        animation.push(&field.view(), 3.0).expect("frame renders");
        animation.push(&field.mapv(|v| -v).view(), 3.0).expect("frame renders");
        assert_eq!(animation.frame_count(), 2);

        animation.export_gif(&path, 100, 3).expect("gif export succeeds");
        let bytes = std::fs::read(&path).expect("gif readable");
        assert!(bytes.starts_with(b"GIF8"));
    }

    // Tests an empty animation cannot be exported
    #[test]
    fn test_export_gif_without_frames() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let animation = StageAnimation::new(1);

        let result = animation.export_gif(&dir.path().join("empty.gif"), 100, 1);
        assert!(matches!(result, Err(BurgError::InvalidField { .. })));
        assert!(!dir.path().join("empty.gif").exists());
    }

    // Tests an unrenderable field adds no frame
    #[test]
    fn test_push_rejects_empty_field() {
        let mut animation = StageAnimation::new(1);
        let empty = Array2::<f64>::zeros((0, 0));

        assert!(animation.push(&empty.view(), 1.0).is_err());
        assert_eq!(animation.frame_count(), 0);
    }
}
