pub mod config;
pub mod logging;

pub mod archive;
pub mod dataset;
pub mod download;
pub mod error;
pub mod find;
pub mod paths;
pub mod url_model;

pub use dataset::{prepare_dataset, prepare_dataset_with};
pub use download::FetchOptions;
pub use error::DatasetError;
pub use find::{find_path, try_find_path, FindPathError, PathList};
