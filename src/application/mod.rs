pub mod loader;
pub mod lookup;
