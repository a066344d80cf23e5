#![doc = include_str!("README.md")]
mod api;
mod constants;
mod error;
mod registry;

pub use api::{get_container, initialize_container, remove_container, Container};
pub use constants::DEFAULT_CONTAINER_NAME;
pub use error::{ContainerError, ContainerResult};
