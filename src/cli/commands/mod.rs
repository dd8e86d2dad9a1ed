pub mod modes;
pub mod plan;
pub mod session;
