use std::io::Write;

use crate::mat_pipeline::common::error::Result;
use crate::mat_pipeline::record::types::MatrixRecord;

pub trait MatWriter {
    fn write_mat(&self, record: &MatrixRecord, output: &mut dyn Write) -> Result<()>;
}
