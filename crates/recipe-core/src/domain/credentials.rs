//! User Credentials
//!
//! Form-backing objects for the signup and login pages. The context that
//! selects a ruleset is the enum variant itself.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Which ruleset a credentials object is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialsContext {
    NewUser,
    Login,
    Data,
}

impl CredentialsContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialsContext::NewUser => "newuser",
            CredentialsContext::Login => "login",
            CredentialsContext::Data => "data",
        }
    }
}

impl fmt::Display for CredentialsContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CredentialsContext {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newuser" => Ok(CredentialsContext::NewUser),
            "login" => Ok(CredentialsContext::Login),
            "data" => Ok(CredentialsContext::Data),
            other => Err(FormError::UnknownContext(other.to_string())),
        }
    }
}

/// Login page form. Serializes as the `/api/v1/user/login` body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Signup page form. Serializes as the `/api/v1/user/create` body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUserForm {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "verify")]
    pub verify_password: String,
}

/// Read-only projection of a user, never validated
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// Credentials tagged with the page they back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCredentials {
    Login(LoginForm),
    NewUser(NewUserForm),
    ReadOnly(UserData),
}

impl UserCredentials {
    /// Empty form for a context
    pub fn blank(context: CredentialsContext) -> Self {
        match context {
            CredentialsContext::NewUser => UserCredentials::NewUser(NewUserForm::default()),
            CredentialsContext::Login => UserCredentials::Login(LoginForm::default()),
            CredentialsContext::Data => UserCredentials::ReadOnly(UserData::default()),
        }
    }

    /// Empty form from a context name; unknown names are a wiring mistake.
    pub fn for_context(context: &str) -> Result<Self, FormError> {
        Ok(Self::blank(context.parse()?))
    }

    pub fn context(&self) -> CredentialsContext {
        match self {
            UserCredentials::Login(_) => CredentialsContext::Login,
            UserCredentials::NewUser(_) => CredentialsContext::NewUser,
            UserCredentials::ReadOnly(_) => CredentialsContext::Data,
        }
    }

    pub fn username(&self) -> &str {
        match self {
            UserCredentials::Login(form) => &form.username,
            UserCredentials::NewUser(form) => &form.username,
            UserCredentials::ReadOnly(data) => &data.username,
        }
    }
}

impl From<LoginForm> for UserCredentials {
    fn from(form: LoginForm) -> Self {
        UserCredentials::Login(form)
    }
}

impl From<NewUserForm> for UserCredentials {
    fn from(form: NewUserForm) -> Self {
        UserCredentials::NewUser(form)
    }
}

impl From<UserData> for UserCredentials {
    fn from(data: UserData) -> Self {
        UserCredentials::ReadOnly(data)
    }
}
