pub mod decrypt;
pub mod info;
pub mod name;

pub use decrypt::*;
pub use info::*;
pub use name::*;
