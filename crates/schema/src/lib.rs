//! Wire types of the pomoshtnik bot.
//!
//! Every inbound payload is decoded into one of the closed types in this
//! crate before anything acts on it:
//!
//! - [`commands`]: chat commands, users, stored searches and their generic
//!   result wrappers
//! - [`api`]: messages between the web UI and the bot
//! - [`tmdb`], [`github`], [`isbndb`]: third-party API responses and
//!   webhook deliveries
//! - [`tokens`]: the chat front-end, decoding `!command arg…` text into a
//!   [`Command`](commands::Command)
//!
//! Each type implements [`Decode`](pomoshtnik_validator::foundation::Decode)
//! and serializes back to the exact shape it decodes from.
//!
//! # Examples
//!
//! ```
//! use pomoshtnik_schema::api::ApiRequest;
//! use pomoshtnik_schema::commands::Command;
//!
//! let request: ApiRequest = pomoshtnik_schema::decode_str(r#"{"type":"GetUsers"}"#).unwrap();
//! assert_eq!(request, ApiRequest::GetUsers);
//!
//! let command = pomoshtnik_schema::decode_text("!movie The Matrix").unwrap();
//! assert_eq!(command, Command::Movie("The Matrix".to_owned()));
//! ```

#![allow(clippy::result_large_err)]

pub mod api;
pub mod commands;
mod decode;
mod error;
pub mod github;
pub mod isbndb;
pub mod tmdb;
pub mod tokens;

pub use decode::{decode_str, decode_value};
pub use error::{DecodeError, Result};
pub use tokens::{decode_text, decode_tokens};
