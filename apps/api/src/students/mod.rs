pub mod completeness;
pub mod filter;
pub mod handlers;
pub mod service;
pub mod subscription;
pub mod view;
