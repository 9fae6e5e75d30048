pub mod command;
pub mod envelope;
pub mod error;
pub mod response;


pub use command::{
    ChatArgs, Command, DeleteUserArgs, EditUserArgs, GetSourceArgs, KeygenArgs, LoginArgs,
    StoreUserArgs,
};
pub use envelope::Envelope;
pub use error::{McpError, Result};
pub use response::Response;
