pub mod cli;
pub mod client;
pub mod config;
pub mod encoder;
pub mod error;
pub mod output;
pub mod review;
pub mod scanner;
pub mod translate;
