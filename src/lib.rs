pub mod app;
pub mod config;
pub mod error;
pub mod db {
    pub mod repository;
}
pub mod api {
    pub mod advertising;
    pub mod errors;
}
