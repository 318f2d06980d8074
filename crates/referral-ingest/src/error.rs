use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("xlsx error: {0}")]
    Xlsx(#[from] calamine::Error),
    #[error("workbook has no worksheets: {}", path.display())]
    EmptyWorkbook { path: PathBuf },
    #[error("file has no header row: {}", path.display())]
    MissingHeader { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, IngestError>;
