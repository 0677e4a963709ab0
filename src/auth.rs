//! ## auth
//!
//! credentials handed to the libsmbclient auth callback

/// Credentials used when a server asks for authentication.
///
/// The default is the anonymous guest login (username `guest`, empty
/// password, no workgroup), which is also what the auth callback falls
/// back to for fields left empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmbAuth {
    workgroup: String,
    username: String,
    password: String,
}

impl Default for SmbAuth {
    fn default() -> Self {
        Self::guest()
    }
}

impl SmbAuth {
    /// Anonymous guest credentials
    pub fn guest() -> Self {
        Self {
            workgroup: String::new(),
            username: String::from("guest"),
            password: String::new(),
        }
    }

    /// Set workgroup
    pub fn workgroup<S: AsRef<str>>(mut self, workgroup: S) -> Self {
        self.workgroup = workgroup.as_ref().to_string();
        self
    }

    /// Set username
    pub fn username<S: AsRef<str>>(mut self, username: S) -> Self {
        self.username = username.as_ref().to_string();
        self
    }

    /// Set password
    pub fn password<S: AsRef<str>>(mut self, password: S) -> Self {
        self.password = password.as_ref().to_string();
        self
    }

    /// Workgroup the credentials belong to; empty when unset
    pub fn workgroup_str(&self) -> &str {
        &self.workgroup
    }

    /// Username presented to the server
    pub fn username_str(&self) -> &str {
        &self.username
    }

    /// Password presented to the server; empty for guest logins
    pub fn password_str(&self) -> &str {
        &self.password
    }
}

#[cfg(test)]
mod test {

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn should_default_to_guest() {
        let auth = SmbAuth::default();
        assert_eq!(auth.username_str(), "guest");
        assert_eq!(auth.password_str(), "");
        assert_eq!(auth.workgroup_str(), "");
    }

    #[test]
    fn should_build_credentials() {
        let auth = SmbAuth::default()
            .workgroup("WORKGROUP")
            .username("test")
            .password("s3cret");
        assert_eq!(auth.workgroup_str(), "WORKGROUP");
        assert_eq!(auth.username_str(), "test");
        assert_eq!(auth.password_str(), "s3cret");
    }
}
