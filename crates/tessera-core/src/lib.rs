pub mod constants;
pub mod coords;
pub mod direction;
pub mod spawn;
pub mod types;
