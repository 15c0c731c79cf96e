#[cfg(test)]
mod render_tests {
    use crate::render::Frame;

    #[test]
    fn test_new_frame_is_black() {
        let frame = Frame::new(2, 3);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.width(), 3);
        assert_eq!(frame.as_bytes().len(), 2 * 3 * 3);
        assert!(frame.as_bytes().iter().all(|byte| *byte == 0));
    }

    #[test]
    fn test_pixel_roundtrip_is_row_major() {
        let mut frame = Frame::new(2, 2);
        frame.set(0, 1, [10, 20, 30]);
        frame.set(1, 0, [40, 50, 60]);
        assert_eq!(frame.pixel(0, 1), [10, 20, 30]);
        assert_eq!(frame.pixel(1, 0), [40, 50, 60]);
        assert_eq!(frame.pixel(0, 0), [0, 0, 0]);
        assert_eq!(&frame.as_bytes()[3..6], &[10, 20, 30]);
        assert_eq!(&frame.as_bytes()[6..9], &[40, 50, 60]);
    }

    #[test]
    fn test_csv_export_writes_one_record_per_pixel() {
        let mut frame = Frame::new(2, 2);
        frame.set(0, 0, [1, 2, 3]);
        frame.set(1, 1, [255, 128, 0]);
        frame.to_csv("test_junk_frame.csv").ok().unwrap();

        let written = std::fs::read_to_string("test_junk_frame.csv").ok().unwrap();
        let records: Vec<&str> = written.lines().collect();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0], "1,2,3");
        assert_eq!(records[3], "255,128,0");

        std::fs::remove_file("test_junk_frame.csv").ok().unwrap();
    }

    #[test]
    fn test_bitmap_export_writes_a_file() {
        let mut frame = Frame::new(4, 4);
        frame.set(2, 2, [200, 100, 50]);
        frame.to_bitmap("test_junk_frame.bmp").ok().unwrap();

        let metadata = std::fs::metadata("test_junk_frame.bmp").ok().unwrap();
        assert!(metadata.len() > 0);

        std::fs::remove_file("test_junk_frame.bmp").ok().unwrap();
    }
}
