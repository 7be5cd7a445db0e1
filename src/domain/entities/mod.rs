pub mod owner;

pub use owner::{MediaOwner, PropertyType};
