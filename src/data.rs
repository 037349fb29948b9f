//! Trip datasets: where they live, how they are read, how they are filtered.

pub mod loader;
pub mod registry;
pub mod table;

pub use loader::{apply_filter, load_city, load_data, read_table};
pub use registry::DatasetRegistry;
pub use table::{Row, Schema, TripTable};
