pub mod handlers;
pub mod reconcile;
pub mod service;
