use std::sync::Arc;

use crate::container::constants::DEFAULT_CONTAINER_NAME;
use crate::container::error::{ContainerError, ContainerResult};
use crate::container::registry;
use crate::notifications::Notifications;
use crate::records::{Database, RecordId};
use crate::remote::{remote_call, AccountStatus, RecordServiceArc, RemoteFuture};

struct ContainerInner {
    name: String,
    service: RecordServiceArc,
}

/// Entry point to one remote record store: hands out the [`Database`] and
/// [`Notifications`] facades and answers account and user questions.
#[derive(Clone)]
pub struct Container {
    inner: Arc<ContainerInner>,
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("name", &self.inner.name)
            .finish_non_exhaustive()
    }
}

impl Container {
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn service(&self) -> RecordServiceArc {
        Arc::clone(&self.inner.service)
    }

    pub fn database(&self) -> Database {
        Database::new(self.service())
    }

    pub fn notifications(&self) -> Notifications {
        Notifications::new(self.service())
    }

    /// Resolves `true` when an account is available; every other account
    /// state resolves as its matching error.
    pub fn account_status(&self) -> RemoteFuture<bool, ContainerError> {
        let service = self.service();
        remote_call(move |promise| {
            service.account_status(Box::new(move |status| {
                promise.resolve(match status {
                    AccountStatus::Available => Ok(true),
                    AccountStatus::NoAccount => Err(ContainerError::AccountNotFound),
                    AccountStatus::Restricted => Err(ContainerError::AccountRestricted),
                    AccountStatus::CouldNotDetermine => Err(ContainerError::AccountNotDetermined),
                    AccountStatus::Unknown => Err(ContainerError::AccountUnknown),
                });
            }));
        })
    }

    /// Asks the user to make their identity discoverable to other users of
    /// the store. Anything short of a grant resolves `PermissionNotGranted`.
    pub fn request_discoverability(&self) -> RemoteFuture<bool, ContainerError> {
        let service = self.service();
        remote_call(move |promise| {
            service.request_discoverability_permission(Box::new(move |result| {
                promise.resolve(match result {
                    Ok(true) => Ok(true),
                    Ok(false) | Err(_) => Err(ContainerError::PermissionNotGranted),
                });
            }));
        })
    }

    pub fn fetch_user_record_id(&self) -> RemoteFuture<RecordId, ContainerError> {
        let service = self.service();
        remote_call(move |promise| {
            service.fetch_user_record_id(Box::new(move |result| {
                promise.resolve(result.map_err(|err| ContainerError::CouldNotFetchUserId {
                    message: err.to_string(),
                }));
            }));
        })
    }

    /// Fetches the current user's record id, then discovers their identity
    /// and resolves with a display name — the given name when present, the
    /// family name otherwise.
    pub fn discover_user_display_name(&self) -> RemoteFuture<String, ContainerError> {
        let service = self.service();
        remote_call(move |promise| {
            let discover_service = Arc::clone(&service);
            service.fetch_user_record_id(Box::new(move |result| match result {
                Ok(record_id) => {
                    discover_service.discover_user(
                        record_id,
                        Box::new(move |result| {
                            promise.resolve(match result {
                                Ok(identity) => match identity.display_name() {
                                    Some(name) => Ok(name.to_string()),
                                    None => Err(ContainerError::CouldNotDiscoverUser {
                                        message: "user identity has no name components"
                                            .to_string(),
                                    }),
                                },
                                Err(err) => Err(ContainerError::CouldNotDiscoverUser {
                                    message: err.to_string(),
                                }),
                            });
                        }),
                    );
                }
                Err(err) => {
                    promise.resolve(Err(ContainerError::CouldNotFetchUserId {
                        message: err.to_string(),
                    }));
                }
            }));
        })
    }
}

/// Registers a container under `name` (the default name when `None`).
/// Initializing an existing name is an error; use [`get_container`] to look
/// one up.
pub fn initialize_container(
    name: Option<&str>,
    service: RecordServiceArc,
) -> ContainerResult<Container> {
    let name = name.unwrap_or(DEFAULT_CONTAINER_NAME);
    if name.trim().is_empty() {
        return Err(ContainerError::BadContainerName {
            name: name.to_string(),
        });
    }
    let mut containers = registry::containers_guard();
    if containers.contains_key(name) {
        return Err(ContainerError::DuplicateContainer {
            name: name.to_string(),
        });
    }
    let container = Container {
        inner: Arc::new(ContainerInner {
            name: name.to_string(),
            service,
        }),
    };
    containers.insert(name.to_string(), container.clone());
    Ok(container)
}

pub fn get_container(name: Option<&str>) -> ContainerResult<Container> {
    let name = name.unwrap_or(DEFAULT_CONTAINER_NAME);
    registry::containers_guard()
        .get(name)
        .cloned()
        .ok_or_else(|| ContainerError::NoContainer {
            name: name.to_string(),
        })
}

pub fn remove_container(name: &str) {
    registry::containers_guard().remove(name);
}
