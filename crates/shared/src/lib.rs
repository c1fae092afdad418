pub mod carousel;
pub mod counter;
pub mod geo;
pub mod models;
