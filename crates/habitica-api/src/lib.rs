//! # habitica-api
//!
//! A small library for fetching a Habitica user's level progress.
//!
//! This crate issues the single `GET /api/v3/user` request a progress badge
//! needs and reduces the response to a [`ProgressSnapshot`].
//!
//! ## Features
//!
//! - Credentials from `HABITICA_USER_ID` / `HABITICA_API_TOKEN`
//! - Typed response structures for the `stats` object
//! - A percentage that is always defined and always in `0..=100`
//!
//! ## Example
//!
//! ```rust,ignore
//! use habitica_api::{ClientOptions, Credentials, HabiticaClient};
//!
//! let credentials = Credentials::from_env()?;
//! let client = HabiticaClient::new(ClientOptions::default())?;
//! let progress = client.get_progress(&credentials).await?;
//! println!("Level {} ({}%)", progress.level, progress.percentage());
//! ```

pub mod client;
pub mod credentials;
pub mod error;
pub mod types;

pub use client::{parse_progress, ClientOptions, HabiticaClient, DEFAULT_CLIENT_NAME, USER_API_URL};
pub use credentials::{Credentials, ENV_VAR_API_TOKEN, ENV_VAR_USER_ID};
pub use error::{ApiError, CredentialError, Error};
pub use types::{ProgressSnapshot, UserData, UserResponse, UserStats};
