pub mod pager;
pub mod render;
pub mod theme;
