// Data layer: catalog models and the remote JSON loader.

pub mod models;
pub mod remote;
