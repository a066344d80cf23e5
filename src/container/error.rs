use std::fmt;

pub type ContainerResult<T> = Result<T, ContainerError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    NoContainer { name: String },
    BadContainerName { name: String },
    DuplicateContainer { name: String },
    AccountNotFound,
    AccountRestricted,
    AccountNotDetermined,
    AccountUnknown,
    PermissionNotGranted,
    CouldNotFetchUserId { message: String },
    CouldNotDiscoverUser { message: String },
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerError::NoContainer { name } => {
                write!(
                    f,
                    "No container '{name}' has been created - call initialize_container() first"
                )
            }
            ContainerError::BadContainerName { name } => {
                write!(f, "Illegal container name: '{name}'")
            }
            ContainerError::DuplicateContainer { name } => {
                write!(f, "Container named '{name}' already exists")
            }
            ContainerError::AccountNotFound => {
                write!(f, "No account is signed in on this device")
            }
            ContainerError::AccountRestricted => {
                write!(f, "The account is restricted by policy")
            }
            ContainerError::AccountNotDetermined => {
                write!(f, "The account status could not be determined")
            }
            ContainerError::AccountUnknown => {
                write!(f, "The account is in an unrecognized state")
            }
            ContainerError::PermissionNotGranted => {
                write!(f, "User discoverability permission was not granted")
            }
            ContainerError::CouldNotFetchUserId { message } => {
                write!(f, "Could not fetch the user record id: {message}")
            }
            ContainerError::CouldNotDiscoverUser { message } => {
                write!(f, "Could not discover the user: {message}")
            }
        }
    }
}

impl std::error::Error for ContainerError {}
