pub mod error;
pub mod osrm;
pub mod planner;
pub mod service;
pub mod summary;
