//! Progress indicators shown while waiting on the backend

pub mod spinner;
