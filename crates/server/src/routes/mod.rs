pub mod ask;
pub mod health;
pub mod metrics;
pub mod root;
