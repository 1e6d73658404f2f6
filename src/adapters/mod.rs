pub mod catalog_assets;
pub mod catalog_fetcher_http;
pub mod dialoguer_picker;
pub mod filesystem;

pub use catalog_fetcher_http::HttpCatalogFetcher;
pub use dialoguer_picker::DialoguerPicker;
pub use filesystem::{FilesystemDataStore, FilesystemScriptSink};
