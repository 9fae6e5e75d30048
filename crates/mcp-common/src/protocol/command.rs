//! MCP Command Variants
//!
//! One variant per remote operation the server understands. Every variant
//! except [`Command::Login`] carries the opaque bearer token issued by the
//! server at login. Argument structs serialize with the exact key names the
//! server expects (`usePublic`, `sourceId`, ...), so building an envelope is
//! a plain `serde` serialization of the variant's argument struct.
//!
//! Optional fields are resolved to their documented defaults when an
//! argument struct is constructed, never later in transport code.

use serde::{Deserialize, Serialize};

use super::error::{McpError, Result};

/// Default chat language when `--language` is not supplied.
pub const DEFAULT_CHAT_LANGUAGE: &str = "de";
/// Default account language for store_user and edit_user.
pub const DEFAULT_USER_LANGUAGE: &str = "en";
/// Default timezone assigned to newly stored users.
pub const DEFAULT_STORE_TIMEZONE: &str = "Europe/Berlin";
/// Default timezone applied when editing a user.
pub const DEFAULT_EDIT_TIMEZONE: &str = "UTC";

/// Arguments for the `login` command.
///
/// Login is the only command sent without a token; the server's reply
/// contains the token used by every other command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginArgs {
    pub email: String,
    pub password: String,
}

impl LoginArgs {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Arguments for the `chat` command.
///
/// # Example
///
/// ```
/// use mcp_common::protocol::ChatArgs;
///
/// let args = ChatArgs::new("What is the capital of France?")
///     .with_language("fr")
///     .with_groups(vec!["sales".into()]);
/// assert!(!args.use_public);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatArgs {
    pub question: String,
    #[serde(rename = "usePublic")]
    pub use_public: bool,
    pub language: String,
    pub groups: Vec<String>,
}

impl ChatArgs {
    /// Creates chat arguments with the documented defaults:
    /// `usePublic=false`, `groups=[]`, `language="de"`.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            use_public: false,
            language: DEFAULT_CHAT_LANGUAGE.to_string(),
            groups: Vec::new(),
        }
    }

    pub fn with_public(mut self, use_public: bool) -> Self {
        self.use_public = use_public;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Sets the group list. Order and duplicates are preserved as given.
    pub fn with_groups(mut self, groups: Vec<String>) -> Self {
        self.groups = groups;
        self
    }
}

/// Arguments for the `get_source` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetSourceArgs {
    #[serde(rename = "sourceId")]
    pub source_id: String,
}

impl GetSourceArgs {
    pub fn new(source_id: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
        }
    }
}

/// Arguments for the `store_user` command.
///
/// Unlike [`EditUserArgs`], every optional field is always present in the
/// envelope; `ftpPassword` in particular is sent as an empty string when not
/// supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreUserArgs {
    pub name: String,
    pub email: String,
    pub password: String,
    pub language: String,
    pub timezone: String,
    pub roles: Vec<String>,
    pub groups: Vec<String>,
    #[serde(rename = "usePublic")]
    pub use_public: bool,
    #[serde(rename = "activateFtp")]
    pub activate_ftp: bool,
    #[serde(rename = "ftpPassword")]
    pub ftp_password: String,
}

impl StoreUserArgs {
    /// Creates store_user arguments with the documented defaults:
    /// `language="en"`, `timezone="Europe/Berlin"`, empty role/group lists,
    /// all flags off, empty FTP password.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            language: DEFAULT_USER_LANGUAGE.to_string(),
            timezone: DEFAULT_STORE_TIMEZONE.to_string(),
            roles: Vec::new(),
            groups: Vec::new(),
            use_public: false,
            activate_ftp: false,
            ftp_password: String::new(),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    pub fn with_roles(mut self, roles: Vec<String>) -> Self {
        self.roles = roles;
        self
    }

    pub fn with_groups(mut self, groups: Vec<String>) -> Self {
        self.groups = groups;
        self
    }

    pub fn with_public(mut self, use_public: bool) -> Self {
        self.use_public = use_public;
        self
    }

    pub fn with_ftp(mut self, activate: bool, password: impl Into<String>) -> Self {
        self.activate_ftp = activate;
        self.ftp_password = password.into();
        self
    }
}

/// Arguments for the `edit_user` command.
///
/// `password` and `ftp_password` are omitted from the envelope entirely when
/// unset rather than sent as empty strings, so the server does not overwrite
/// the stored credentials with blanks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditUserArgs {
    pub email: String,
    pub name: String,
    pub language: String,
    pub timezone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "publicUpload")]
    pub public_upload: bool,
    pub groups: Vec<String>,
    pub roles: Vec<String>,
    #[serde(rename = "activateFtp")]
    pub activate_ftp: bool,
    #[serde(rename = "ftpPassword", skip_serializing_if = "Option::is_none")]
    pub ftp_password: Option<String>,
}

impl EditUserArgs {
    /// Creates edit_user arguments with the documented defaults:
    /// `language="en"`, `timezone="UTC"`, empty lists, flags off,
    /// credentials unset.
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            language: DEFAULT_USER_LANGUAGE.to_string(),
            timezone: DEFAULT_EDIT_TIMEZONE.to_string(),
            password: None,
            public_upload: false,
            groups: Vec::new(),
            roles: Vec::new(),
            activate_ftp: false,
            ftp_password: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// Sets a new account password. An empty string is treated as unset.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        let password = password.into();
        self.password = if password.is_empty() {
            None
        } else {
            Some(password)
        };
        self
    }

    pub fn with_public_upload(mut self, public_upload: bool) -> Self {
        self.public_upload = public_upload;
        self
    }

    pub fn with_groups(mut self, groups: Vec<String>) -> Self {
        self.groups = groups;
        self
    }

    pub fn with_roles(mut self, roles: Vec<String>) -> Self {
        self.roles = roles;
        self
    }

    /// Sets the FTP flag and password. An empty password is treated as unset.
    pub fn with_ftp(mut self, activate: bool, password: impl Into<String>) -> Self {
        self.activate_ftp = activate;
        let password = password.into();
        self.ftp_password = if password.is_empty() {
            None
        } else {
            Some(password)
        };
        self
    }
}

/// Arguments for the `delete_user` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteUserArgs {
    pub email: String,
}

impl DeleteUserArgs {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Arguments for the `keygen` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeygenArgs {
    pub password: String,
}

impl KeygenArgs {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }
}

/// A single remote operation, ready to be packaged into an envelope.
///
/// The set of commands is fixed; the server rejects anything else. Every
/// variant except `Login` carries the bearer token alongside its arguments,
/// matching the wire layout where the token sits next to `command` rather
/// than inside `arguments`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login(LoginArgs),
    Logout { token: String },
    Chat { token: String, args: ChatArgs },
    GetSource { token: String, args: GetSourceArgs },
    StoreUser { token: String, args: StoreUserArgs },
    EditUser { token: String, args: EditUserArgs },
    DeleteUser { token: String, args: DeleteUserArgs },
    Keygen { token: String, args: KeygenArgs },
}

impl Command {
    /// The wire name of this command.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Login(_) => "login",
            Command::Logout { .. } => "logout",
            Command::Chat { .. } => "chat",
            Command::GetSource { .. } => "get_source",
            Command::StoreUser { .. } => "store_user",
            Command::EditUser { .. } => "edit_user",
            Command::DeleteUser { .. } => "delete_user",
            Command::Keygen { .. } => "keygen",
        }
    }

    /// The bearer token, absent only for login.
    pub fn token(&self) -> Option<&str> {
        match self {
            Command::Login(_) => None,
            Command::Logout { token }
            | Command::Chat { token, .. }
            | Command::GetSource { token, .. }
            | Command::StoreUser { token, .. }
            | Command::EditUser { token, .. }
            | Command::DeleteUser { token, .. }
            | Command::Keygen { token, .. } => Some(token),
        }
    }

    /// Verifies that every required field is non-empty.
    ///
    /// CLI parsing already rejects missing flags, but the check is repeated
    /// here so that no envelope with an empty required field can reach the
    /// wire regardless of how the command was constructed.
    pub fn validate(&self) -> Result<()> {
        match self {
            Command::Login(args) => {
                require("email", &args.email)?;
                require("password", &args.password)
            }
            Command::Logout { token } => require("token", token),
            Command::Chat { token, args } => {
                require("token", token)?;
                require("question", &args.question)
            }
            Command::GetSource { token, args } => {
                require("token", token)?;
                require("sourceId", &args.source_id)
            }
            Command::StoreUser { token, args } => {
                require("token", token)?;
                require("name", &args.name)?;
                require("email", &args.email)?;
                require("password", &args.password)
            }
            Command::EditUser { token, args } => {
                require("token", token)?;
                require("email", &args.email)?;
                require("name", &args.name)
            }
            Command::DeleteUser { token, args } => {
                require("token", token)?;
                require("email", &args.email)
            }
            Command::Keygen { token, args } => {
                require("token", token)?;
                require("password", &args.password)
            }
        }
    }
}

fn require(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        Err(McpError::Validation { field })
    } else {
        Ok(())
    }
}
