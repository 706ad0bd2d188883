pub mod file_encoder;
pub mod predict;

pub use file_encoder::FileEncoder;
pub use predict::FetchBackend;
