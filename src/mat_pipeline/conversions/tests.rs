use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

use crate::mat_pipeline::common::error::{ConversionError, Result};
use crate::mat_pipeline::conversions::image_to_mat::ImageToMatPipeline;
use crate::mat_pipeline::decode::reader::ImageReader;
use crate::mat_pipeline::decode::types::DecodedImage;
use crate::mat_pipeline::mat::types::{ConversionConfig, ResizeFilter};
use crate::mat_pipeline::mat::writer::MatWriter;
use crate::mat_pipeline::record::types::MatrixRecord;

struct MockReader {
    should_fail: bool,
    mock_image: Option<DecodedImage>,
}

impl ImageReader for MockReader {
    fn read_image(&self, _data: &[u8]) -> Result<DecodedImage> {
        if self.should_fail {
            return Err(ConversionError::DecodeError("Mock decode error".to_string()));
        }
        Ok(self.mock_image.clone().unwrap_or(DecodedImage {
            width: 64,
            height: 48,
            data: vec![0u8; 64 * 48 * 3],
        }))
    }
}

struct MockWriter {
    should_fail: bool,
    written_records: Arc<Mutex<Vec<MatrixRecord>>>,
}

impl MatWriter for MockWriter {
    fn write_mat(&self, record: &MatrixRecord, _output: &mut dyn Write) -> Result<()> {
        if self.should_fail {
            return Err(ConversionError::SerializationError(
                "Mock encode error".to_string(),
            ));
        }
        self.written_records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

#[test]
fn test_config_builder() {
    let config = ConversionConfig::builder()
        .filter(ResizeFilter::Lanczos3)
        .case_insensitive_extensions(false)
        .build();

    assert!(matches!(config.filter, ResizeFilter::Lanczos3));
    assert!(!config.case_insensitive_extensions);
}

#[test]
fn test_successful_conversion() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader {
        should_fail: false,
        mock_image: None,
    };
    let writer = MockWriter {
        should_fail: false,
        written_records: written.clone(),
    };

    let pipeline = ImageToMatPipeline::with_custom(reader, writer, ConversionConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake image data", &mut output);

    assert!(result.is_ok());
    let records = written.lock().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].i0r.dim(), (480, 640));
    assert_eq!(records[0].transfm.dim(), (3, 3));
    assert_eq!(records[0].roi.dim(), (2, 4));
}

#[test]
fn test_reader_failure() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader {
        should_fail: true,
        mock_image: None,
    };
    let writer = MockWriter {
        should_fail: false,
        written_records: written.clone(),
    };

    let pipeline = ImageToMatPipeline::with_custom(reader, writer, ConversionConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake image data", &mut output);

    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), ConversionError::DecodeError(_)));
    assert!(written.lock().unwrap().is_empty());
}

#[test]
fn test_writer_failure() {
    let reader = MockReader {
        should_fail: false,
        mock_image: None,
    };
    let writer = MockWriter {
        should_fail: true,
        written_records: Arc::new(Mutex::new(Vec::new())),
    };

    let pipeline = ImageToMatPipeline::with_custom(reader, writer, ConversionConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake image data", &mut output);

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err(),
        ConversionError::SerializationError(_)
    ));
}

#[test]
fn test_convert_file_missing_input() {
    let pipeline = ImageToMatPipeline::new(ConversionConfig::default());
    let dir = tempfile::tempdir().unwrap();

    let result = pipeline.convert_file(dir.path().join("missing.png"), dir.path().join("out.mat"));

    assert!(matches!(
        result.unwrap_err(),
        ConversionError::InputReadError(_)
    ));
}

#[test]
fn test_convert_file_failure_leaves_no_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("corrupt.png");
    let output = dir.path().join("corrupt.mat");
    std::fs::write(&input, b"not an image").unwrap();

    let pipeline = ImageToMatPipeline::new(ConversionConfig::default());
    let result = pipeline.convert_file(&input, &output);

    assert!(matches!(result.unwrap_err(), ConversionError::DecodeError(_)));
    assert!(!output.exists());
}

#[test]
fn test_batch_continues_past_corrupt_file() {
    let input_dir = tempfile::tempdir().unwrap();
    let output_dir = tempfile::tempdir().unwrap();

    image::RgbImage::from_pixel(8, 8, image::Rgb([10, 20, 30]))
        .save(input_dir.path().join("good.png"))
        .unwrap();
    std::fs::write(input_dir.path().join("corrupt.png"), b"not an image").unwrap();

    let pipeline = ImageToMatPipeline::new(ConversionConfig::default());
    let summary = pipeline
        .convert_dir(input_dir.path(), output_dir.path())
        .unwrap();

    assert_eq!(summary.converted.len(), 1);
    assert_eq!(summary.failed.len(), 1);
    assert!(output_dir.path().join("good.mat").is_file());
    assert!(!output_dir.path().join("corrupt.mat").is_file());
    assert!(summary.failed[0].0.ends_with("corrupt.png"));
}

#[test]
fn test_batch_matches_uppercase_extensions_by_default() {
    let input_dir = tempfile::tempdir().unwrap();
    let output_dir = tempfile::tempdir().unwrap();

    image::RgbImage::from_pixel(8, 8, image::Rgb([1, 2, 3]))
        .save_with_format(input_dir.path().join("SHOT.PNG"), image::ImageFormat::Png)
        .unwrap();

    let pipeline = ImageToMatPipeline::new(ConversionConfig::default());
    let summary = pipeline
        .convert_dir(input_dir.path(), output_dir.path())
        .unwrap();

    assert_eq!(summary.converted.len(), 1);
    assert!(output_dir.path().join("SHOT.mat").is_file());
}

#[test]
fn test_batch_case_sensitive_matching_skips_uppercase() {
    let input_dir = tempfile::tempdir().unwrap();
    let output_dir = tempfile::tempdir().unwrap();

    image::RgbImage::from_pixel(8, 8, image::Rgb([1, 2, 3]))
        .save_with_format(input_dir.path().join("SHOT.PNG"), image::ImageFormat::Png)
        .unwrap();

    let config = ConversionConfig::builder()
        .case_insensitive_extensions(false)
        .build();
    let pipeline = ImageToMatPipeline::new(config);
    let summary = pipeline
        .convert_dir(input_dir.path(), output_dir.path())
        .unwrap();

    assert!(summary.converted.is_empty());
    assert!(summary.failed.is_empty());
}

#[test]
fn test_batch_creates_missing_output_dir() {
    let input_dir = tempfile::tempdir().unwrap();
    let base = tempfile::tempdir().unwrap();
    let output_dir = base.path().join("nested").join("out");

    image::RgbImage::from_pixel(8, 8, image::Rgb([1, 2, 3]))
        .save(input_dir.path().join("a.png"))
        .unwrap();

    let pipeline = ImageToMatPipeline::new(ConversionConfig::default());
    let summary = pipeline.convert_dir(input_dir.path(), &output_dir).unwrap();

    assert_eq!(summary.converted.len(), 1);
    assert!(output_dir.join("a.mat").is_file());
}

#[test]
fn test_batch_aborts_when_output_dir_uncreatable() {
    let input_dir = tempfile::tempdir().unwrap();
    let base = tempfile::tempdir().unwrap();

    // A plain file where the output directory should go
    let blocker = base.path().join("blocked");
    std::fs::write(&blocker, b"").unwrap();

    let pipeline = ImageToMatPipeline::new(ConversionConfig::default());
    let result = pipeline.convert_dir(input_dir.path(), &blocker);

    assert!(matches!(
        result.unwrap_err(),
        ConversionError::OutputWriteError(_)
    ));
}
