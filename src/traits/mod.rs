pub mod exporter;
pub mod extractor;
pub mod ocr_engine;

pub use exporter::Exporter;
pub use extractor::TokenExtractor;
pub use ocr_engine::{OcrEngine, OcrSession};
