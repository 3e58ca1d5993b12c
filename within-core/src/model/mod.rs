//! Data model for describing a path through a street network

pub mod components;
pub mod street_name;

pub use components::{EdgeAttributes, PathNode};
pub use street_name::{StreetName, UNNAMED_STREET};
