//! SteamCMD command-line construction.

use std::fmt;

/// SteamCMD directive that authenticates a session.
pub const LOGIN_DIRECTIVE: &str = "+login";

/// Ordered SteamCMD argument list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallerArgs {
    args: Vec<String>,
    /// Indices of arguments that must never be logged.
    secrets: Vec<usize>,
}

impl InstallerArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// `+login <username> [password]`
    pub fn login(username: &str, password: Option<&str>) -> Self {
        let mut args = Self::new();
        args.push(LOGIN_DIRECTIVE).push(username);
        if let Some(password) = password {
            args.push_secret(password);
        }
        args
    }

    /// `+app_update <id> validate`
    pub fn update(app_id: &str) -> Self {
        let mut args = Self::new();
        args.push("+app_update").push(app_id).push("validate");
        args
    }

    /// `+app_license_request <id> +app_update <id> validate`
    pub fn first_install(app_id: &str) -> Self {
        let mut args = Self::new();
        args.push("+app_license_request").push(app_id);
        args.extend(Self::update(app_id));
        args
    }

    pub fn push(&mut self, arg: impl Into<String>) -> &mut Self {
        self.args.push(arg.into());
        self
    }

    fn push_secret(&mut self, arg: impl Into<String>) -> &mut Self {
        self.secrets.push(self.args.len());
        self.push(arg)
    }

    pub fn extend(&mut self, other: InstallerArgs) -> &mut Self {
        let offset = self.args.len();
        self.secrets.extend(other.secrets.into_iter().map(|index| index + offset));
        self.args.extend(other.args);
        self
    }

    /// Append `+quit` so SteamCMD exits instead of dropping into its prompt.
    pub fn quit(mut self) -> Self {
        self.push("+quit");
        self
    }

    /// Whether the list already opens with a `+login` directive.
    pub fn starts_with_login(&self) -> bool {
        self.args.first().is_some_and(|arg| arg == LOGIN_DIRECTIVE)
    }

    /// Put `+login <username>` in front unless the list already logs in.
    pub fn with_stored_login(self, username: &str) -> Self {
        if self.starts_with_login() {
            return self;
        }
        let mut args = Self::login(username, None);
        args.extend(self);
        args
    }

    pub fn as_slice(&self) -> &[String] {
        &self.args
    }

    /// Printable view with every password replaced by asterisks.
    pub fn redacted(&self) -> Redacted<'_> {
        Redacted { args: &self.args, secrets: &self.secrets }
    }
}

/// Display adapter returned by [`InstallerArgs::redacted`].
pub struct Redacted<'a> {
    args: &'a [String],
    secrets: &'a [usize],
}

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, arg) in self.args.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            if self.secrets.contains(&index) {
                f.write_str("********")?;
            } else {
                f.write_str(arg)?;
            }
        }
        Ok(())
    }
}
