//! Progress indicators shown while the model is working

pub mod reporter;
