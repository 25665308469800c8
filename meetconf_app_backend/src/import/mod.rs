pub mod csv_reader;

pub use csv_reader::{
    is_supported_input_path, load_participants, CSVReaderConfig, ImportError, LoadError,
};
