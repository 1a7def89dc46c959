pub mod decode;
pub mod mapper;

pub use decode::{decode_row, decode_rows};
pub use mapper::{map_byte, ColorMode};
