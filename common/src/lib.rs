//! Data types shared between the HTTP layer and the record store.

pub mod model;
pub mod requests;
pub mod responses;
