//! Tests for the progress-reporting frame source wrapper

#[cfg(test)]
mod tests {
    use mosaic_decomposer::io::progress::ProgressSource;
    use mosaic_decomposer::io::source::IterSource;
    use mosaic_decomposer::{Frame, FrameSource};

    // Tests frames pass through unchanged and are counted
    // Verified by incrementing on the end-of-sequence call
    #[test]
    fn test_counts_delivered_frames() {
        let frames = vec![Frame::new(4, 3), Frame::new(4, 3)];
        let mut source = ProgressSource::hidden(IterSource::new(frames.into_iter()));

        assert!(source.is_ready());
        let first = source.next_frame().unwrap();
        assert_eq!((first.width(), first.height()), (4, 3));
        assert!(source.next_frame().is_some());
        assert!(source.next_frame().is_none());
        assert!(source.next_frame().is_none());

        assert_eq!(source.delivered(), 2);
    }

    // Tests bounded and unbounded bars both wrap a source
    #[test]
    fn test_bounded_and_spinner_modes() {
        let mut bounded = ProgressSource::new(IterSource::new(std::iter::once(Frame::new(2, 2))), 5);
        assert!(bounded.next_frame().is_some());
        assert_eq!(bounded.delivered(), 1);

        let mut spinner = ProgressSource::new(IterSource::new(std::iter::empty()), 0);
        assert!(spinner.next_frame().is_none());
        assert_eq!(spinner.into_inner().next_frame().map(|frame| frame.width()), None);
    }
}
