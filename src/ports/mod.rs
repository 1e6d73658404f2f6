mod catalog_fetcher;
mod data_store;
mod option_picker;
mod script_sink;

pub use catalog_fetcher::{CatalogFetcher, OfflineFetcher};
pub use data_store::DataStore;
pub use option_picker::OptionPicker;
pub use script_sink::ScriptSink;
