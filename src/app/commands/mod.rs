pub mod catalog_source;
pub mod generate;
pub mod init;
pub mod list;
pub mod select;
pub mod settings;
pub mod welcome;
