// package together the following and re-export
// in a partially flattened structure :
// : callback contract trait
// : request / response types
// : solver status and error types
// : derivative checking

pub mod traits;

mod derivative_check;
mod errors;
mod settings;
mod status;
mod types;

pub use derivative_check::*;
pub use errors::*;
pub use settings::*;
pub use status::*;
pub use traits::*;
pub use types::*;
