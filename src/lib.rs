pub mod anim;
pub mod buffer;
pub mod item;
pub mod parser;
pub mod spin;
pub mod store;
pub mod wheel;
