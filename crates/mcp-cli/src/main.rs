//! # MCP CLI Entry Point
//!
//! One subcommand per remote operation, all sharing the same transport
//! path. Every invocation performs exactly one request over a fresh TCP
//! connection and exits.
//!
//! ## Usage
//!
//! ```bash
//! # Log in and obtain a token
//! mcp login --server-ip 192.168.1.5 --server-port 1234 \
//!     --email admin@example.com --password secret
//!
//! # Ask a question
//! mcp chat --server-ip 192.168.1.5 --server-port 1234 --token TOKEN \
//!     --question "What changed last week?" --use-public --language en
//!
//! # Create a user (list flags repeat, or take space/comma separated lists)
//! mcp store-user --server-ip 192.168.1.5 --server-port 1234 --token TOKEN \
//!     --name Alice --email a@x.com --password p --roles "admin ops"
//! ```
//!
//! The response body is printed to stdout (pretty-printed when it is JSON)
//! and the process exits 0 whether the server reported success or an
//! application-level error; only transport and validation failures exit
//! non-zero.

use anyhow::Result;
use argh::FromArgs;

use mcp_cli::output;
use mcp_client::McpClient;
use mcp_common::protocol::{
    ChatArgs, Command, DeleteUserArgs, EditUserArgs, GetSourceArgs, KeygenArgs, LoginArgs,
    StoreUserArgs,
};
use mcp_common::transport::Endpoint;

/// MCP - command-line clients for the MCP server
#[derive(FromArgs)]
struct Cli {
    #[argh(subcommand)]
    command: Commands,
}

/// Available CLI subcommands, one per remote operation.
#[derive(FromArgs)]
#[argh(subcommand)]
enum Commands {
    Login(LoginCmd),
    Logout(LogoutCmd),
    Chat(ChatCmd),
    GetSource(GetSourceCmd),
    StoreUser(StoreUserCmd),
    EditUser(EditUserCmd),
    DeleteUser(DeleteUserCmd),
    Keygen(KeygenCmd),
}

#[derive(FromArgs)]
#[argh(subcommand, name = "login")]
/// log in and obtain a bearer token
struct LoginCmd {
    /// IPv4 address of the MCP server
    #[argh(option)]
    server_ip: String,

    /// TCP port of the MCP server
    #[argh(option)]
    server_port: u16,

    /// account email address
    #[argh(option)]
    email: String,

    /// account password
    #[argh(option)]
    password: String,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "logout")]
/// invalidate a bearer token
struct LogoutCmd {
    /// IPv4 address of the MCP server
    #[argh(option)]
    server_ip: String,

    /// TCP port of the MCP server
    #[argh(option)]
    server_port: u16,

    /// bearer token from a previous login
    #[argh(option)]
    token: String,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "chat")]
/// send a chat question
struct ChatCmd {
    /// IPv4 address of the MCP server
    #[argh(option)]
    server_ip: String,

    /// TCP port of the MCP server
    #[argh(option)]
    server_port: u16,

    /// bearer token from a previous login
    #[argh(option)]
    token: String,

    /// the question to ask
    #[argh(option)]
    question: String,

    /// also search the public knowledge base
    #[argh(switch)]
    use_public: bool,

    /// group to search; repeatable, each value may also be a space- or
    /// comma-separated list
    #[argh(option)]
    groups: Vec<String>,

    /// answer language (default "de")
    #[argh(option)]
    language: Option<String>,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "get-source")]
/// fetch metadata for one source
struct GetSourceCmd {
    /// IPv4 address of the MCP server
    #[argh(option)]
    server_ip: String,

    /// TCP port of the MCP server
    #[argh(option)]
    server_port: u16,

    /// bearer token from a previous login
    #[argh(option)]
    token: String,

    /// identifier of the source to fetch
    #[argh(option)]
    source_id: String,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "store-user")]
/// create a user account
struct StoreUserCmd {
    /// IPv4 address of the MCP server
    #[argh(option)]
    server_ip: String,

    /// TCP port of the MCP server
    #[argh(option)]
    server_port: u16,

    /// bearer token from a previous login
    #[argh(option)]
    token: String,

    /// display name of the new user
    #[argh(option)]
    name: String,

    /// email address of the new user
    #[argh(option)]
    email: String,

    /// initial password for the new user
    #[argh(option)]
    password: String,

    /// account language (default "en")
    #[argh(option)]
    language: Option<String>,

    /// account timezone (default "Europe/Berlin")
    #[argh(option)]
    timezone: Option<String>,

    /// role to assign; repeatable, each value may also be a space- or
    /// comma-separated list
    #[argh(option)]
    roles: Vec<String>,

    /// group to assign; repeatable, each value may also be a space- or
    /// comma-separated list
    #[argh(option)]
    groups: Vec<String>,

    /// grant access to the public knowledge base
    #[argh(switch)]
    use_public: bool,

    /// provision an FTP account for the user
    #[argh(switch)]
    activate_ftp: bool,

    /// password for the FTP account
    #[argh(option)]
    ftp_password: Option<String>,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "edit-user")]
/// modify an existing user account
struct EditUserCmd {
    /// IPv4 address of the MCP server
    #[argh(option)]
    server_ip: String,

    /// TCP port of the MCP server
    #[argh(option)]
    server_port: u16,

    /// bearer token from a previous login
    #[argh(option)]
    token: String,

    /// email address identifying the account
    #[argh(option)]
    email: String,

    /// new display name
    #[argh(option)]
    name: String,

    /// new password; the stored password is kept when omitted
    #[argh(option)]
    password: Option<String>,

    /// account language (default "en")
    #[argh(option)]
    language: Option<String>,

    /// account timezone (default "UTC")
    #[argh(option)]
    timezone: Option<String>,

    /// allow uploads to the public knowledge base
    #[argh(switch)]
    public_upload: bool,

    /// group to assign; repeatable, each value may also be a space- or
    /// comma-separated list
    #[argh(option)]
    groups: Vec<String>,

    /// role to assign; repeatable, each value may also be a space- or
    /// comma-separated list
    #[argh(option)]
    roles: Vec<String>,

    /// provision an FTP account for the user
    #[argh(switch)]
    activate_ftp: bool,

    /// new FTP password; the stored one is kept when omitted
    #[argh(option)]
    ftp_password: Option<String>,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "delete-user")]
/// delete a user account
struct DeleteUserCmd {
    /// IPv4 address of the MCP server
    #[argh(option)]
    server_ip: String,

    /// TCP port of the MCP server
    #[argh(option)]
    server_port: u16,

    /// bearer token from a previous login
    #[argh(option)]
    token: String,

    /// email address identifying the account to delete
    #[argh(option)]
    email: String,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "keygen")]
/// generate an API key
struct KeygenCmd {
    /// IPv4 address of the MCP server
    #[argh(option)]
    server_ip: String,

    /// TCP port of the MCP server
    #[argh(option)]
    server_port: u16,

    /// bearer token from a previous login
    #[argh(option)]
    token: String,

    /// password confirming the request
    #[argh(option)]
    password: String,
}

/// Splits repeatable list flags: each occurrence may carry several values
/// separated by spaces or commas. Order and duplicates are preserved.
fn split_list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .flat_map(|value| value.split([' ', ',']))
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

impl Commands {
    /// Resolves the parsed flags into a server address and a protocol
    /// command, applying documented defaults for omitted optional flags.
    fn into_parts(self) -> (String, u16, Command) {
        match self {
            Commands::Login(cmd) => (
                cmd.server_ip,
                cmd.server_port,
                Command::Login(LoginArgs::new(cmd.email, cmd.password)),
            ),
            Commands::Logout(cmd) => (
                cmd.server_ip,
                cmd.server_port,
                Command::Logout { token: cmd.token },
            ),
            Commands::Chat(cmd) => {
                let mut args = ChatArgs::new(cmd.question)
                    .with_public(cmd.use_public)
                    .with_groups(split_list(&cmd.groups));
                if let Some(language) = cmd.language {
                    args = args.with_language(language);
                }
                (
                    cmd.server_ip,
                    cmd.server_port,
                    Command::Chat {
                        token: cmd.token,
                        args,
                    },
                )
            }
            Commands::GetSource(cmd) => (
                cmd.server_ip,
                cmd.server_port,
                Command::GetSource {
                    token: cmd.token,
                    args: GetSourceArgs::new(cmd.source_id),
                },
            ),
            Commands::StoreUser(cmd) => {
                let mut args = StoreUserArgs::new(cmd.name, cmd.email, cmd.password)
                    .with_roles(split_list(&cmd.roles))
                    .with_groups(split_list(&cmd.groups))
                    .with_public(cmd.use_public)
                    .with_ftp(cmd.activate_ftp, cmd.ftp_password.unwrap_or_default());
                if let Some(language) = cmd.language {
                    args = args.with_language(language);
                }
                if let Some(timezone) = cmd.timezone {
                    args = args.with_timezone(timezone);
                }
                (
                    cmd.server_ip,
                    cmd.server_port,
                    Command::StoreUser {
                        token: cmd.token,
                        args,
                    },
                )
            }
            Commands::EditUser(cmd) => {
                let mut args = EditUserArgs::new(cmd.email, cmd.name)
                    .with_password(cmd.password.unwrap_or_default())
                    .with_public_upload(cmd.public_upload)
                    .with_groups(split_list(&cmd.groups))
                    .with_roles(split_list(&cmd.roles))
                    .with_ftp(cmd.activate_ftp, cmd.ftp_password.unwrap_or_default());
                if let Some(language) = cmd.language {
                    args = args.with_language(language);
                }
                if let Some(timezone) = cmd.timezone {
                    args = args.with_timezone(timezone);
                }
                (
                    cmd.server_ip,
                    cmd.server_port,
                    Command::EditUser {
                        token: cmd.token,
                        args,
                    },
                )
            }
            Commands::DeleteUser(cmd) => (
                cmd.server_ip,
                cmd.server_port,
                Command::DeleteUser {
                    token: cmd.token,
                    args: DeleteUserArgs::new(cmd.email),
                },
            ),
            Commands::Keygen(cmd) => (
                cmd.server_ip,
                cmd.server_port,
                Command::Keygen {
                    token: cmd.token,
                    args: KeygenArgs::new(cmd.password),
                },
            ),
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for piping the response
    // to jq and friends. Default level WARN; RUST_LOG overrides.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli: Cli = argh::from_env();
    let (server_ip, server_port, command) = cli.command.into_parts();

    let endpoint = Endpoint::new(&server_ip, server_port)?;
    let client = McpClient::new(endpoint);

    tracing::info!(command = command.name(), endpoint = %endpoint, "sending request");
    let response = client.send(&command)?;

    println!("{}", output::render(&response));
    Ok(())
}
