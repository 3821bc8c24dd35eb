//! CSV reading utilities.

mod encoding;
mod reader;

pub use encoding::decode_text;
pub use reader::read_csv_bytes;
