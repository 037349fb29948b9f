pub mod city;
pub mod filter;
pub mod month;
pub mod trip;

pub use city::City;
pub use filter::{Choice, Filter};
pub use month::Month;
pub use trip::Trip;
