pub mod cloudconvert;
pub mod convert;
pub mod dtos;
pub mod models;
pub mod util;
