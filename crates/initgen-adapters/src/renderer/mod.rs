//! Template renderer adapters.

pub mod simple;

pub use simple::SimpleRenderer;
