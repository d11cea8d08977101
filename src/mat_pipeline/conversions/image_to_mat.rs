use std::io::Write;
use std::path::Path;

use tracing::{info, instrument};

use crate::mat_pipeline::{
    common::error::{ConversionError, Result},
    decode::{ImageCrateReader, ImageReader},
    mat::{ConversionConfig, Mat5Writer, MatWriter},
    record::MatrixRecordBuilder,
};

pub struct ImageToMatPipeline<R: ImageReader, W: MatWriter> {
    reader: R,
    writer: W,
    builder: MatrixRecordBuilder,
    config: ConversionConfig,
}

impl ImageToMatPipeline<ImageCrateReader, Mat5Writer> {
    pub fn new(config: ConversionConfig) -> Self {
        Self::with_custom(ImageCrateReader, Mat5Writer, config)
    }
}

impl<R: ImageReader, W: MatWriter> ImageToMatPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            builder: MatrixRecordBuilder::new(config.filter),
            config,
        }
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        info!("Starting image to MAT conversion");

        let image = {
            let _span = tracing::info_span!("decode_image").entered();
            self.reader.read_image(input_data)?
        };

        let record = {
            let _span = tracing::info_span!("assemble_record",
                width = image.width,
                height = image.height
            ).entered();
            self.builder.assemble_record(&image)?
        };

        {
            let _span = tracing::info_span!("encode_mat").entered();
            self.writer.write_mat(&record, output)?;
        }

        info!(
            width = image.width,
            height = image.height,
            "Conversion complete"
        );
        Ok(())
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        // Convert into memory first: a failed conversion must not leave a
        // partial output file on disk
        let mut encoded = Vec::new();
        self.convert(&input_data, &mut encoded)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            std::fs::write(output_path, &encoded).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        Ok(())
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }
}
