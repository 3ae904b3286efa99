pub mod currency;
pub mod errors;
pub mod requests;
pub mod token;
pub mod validation;

pub use requests::*;
