/// Name used when a container is initialized or looked up without one.
pub const DEFAULT_CONTAINER_NAME: &str = "[DEFAULT]";
