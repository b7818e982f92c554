pub mod database;
pub mod render;
pub mod repositories;
pub mod time;
pub mod util;
