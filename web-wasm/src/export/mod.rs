pub mod download;

pub use download::save_bytes;
