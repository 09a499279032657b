// Transport
pub mod fetch;

// Page and table readers
pub mod fields;
pub mod images;
pub mod names;
pub mod population;
