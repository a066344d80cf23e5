use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotificationsErrorCode {
    PermissionBlocked,
    FailedRegistration,
    SubscribeFailed,
    UnsubscribeFailed,
}

impl NotificationsErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationsErrorCode::PermissionBlocked => "notifications/permission-blocked",
            NotificationsErrorCode::FailedRegistration => "notifications/failed-registration",
            NotificationsErrorCode::SubscribeFailed => "notifications/subscribe-failed",
            NotificationsErrorCode::UnsubscribeFailed => "notifications/unsubscribe-failed",
        }
    }
}

#[derive(Clone, Debug)]
pub struct NotificationsError {
    pub code: NotificationsErrorCode,
    message: String,
}

impl NotificationsError {
    pub fn new(code: NotificationsErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl Display for NotificationsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code_str())
    }
}

impl std::error::Error for NotificationsError {}

pub type NotificationsResult<T> = Result<T, NotificationsError>;

pub fn permission_blocked(message: impl Into<String>) -> NotificationsError {
    NotificationsError::new(NotificationsErrorCode::PermissionBlocked, message)
}

pub fn failed_registration(message: impl Into<String>) -> NotificationsError {
    NotificationsError::new(NotificationsErrorCode::FailedRegistration, message)
}

pub fn subscribe_failed(message: impl Into<String>) -> NotificationsError {
    NotificationsError::new(NotificationsErrorCode::SubscribeFailed, message)
}

pub fn unsubscribe_failed(message: impl Into<String>) -> NotificationsError {
    NotificationsError::new(NotificationsErrorCode::UnsubscribeFailed, message)
}
