//! Account operations: registration, login, password recovery.

use super::Operation;
use crate::form::AttachmentRule;
use reqwest::Method;

/// Error shown when registering without a profile picture selected.
pub const PROFILE_PICTURE_REQUIRED: &str = "Please input profile picture";

/// Attachment policy for the registration form.
pub fn registration_rule() -> AttachmentRule {
    AttachmentRule::Required(PROFILE_PICTURE_REQUIRED)
}

pub fn register_user() -> Operation {
    Operation {
        name: "register user",
        method: Method::POST,
        path: "/auth/register".into(),
        success_message: "User created successfully",
        redirect: Some("/"),
    }
}

pub fn login_user() -> Operation {
    Operation {
        name: "login user",
        method: Method::POST,
        path: "/auth/login".into(),
        success_message: "User logged in successfully",
        redirect: None,
    }
}

pub fn forgot_password() -> Operation {
    Operation {
        name: "forgot password",
        method: Method::POST,
        path: "/auth/forgot-password".into(),
        success_message: "Recovery token sent to your email",
        redirect: None,
    }
}

pub fn reset_password() -> Operation {
    Operation {
        name: "reset password",
        method: Method::POST,
        path: "/auth/reset-password".into(),
        success_message: "Password reset successfully",
        redirect: None,
    }
}

pub fn change_password() -> Operation {
    Operation {
        name: "change password",
        method: Method::POST,
        path: "/auth/change-password".into(),
        success_message: "Password changed successfully",
        redirect: None,
    }
}
