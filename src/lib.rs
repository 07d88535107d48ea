//! `tsuru-http` is an async HTTP client for the Tsuru PaaS management API.
//!
//! [`TsuruClient`] is the transport: it joins path segments onto the target
//! host, encodes JSON, form and query payloads, sends the bearer token, and
//! maps status codes to [`TsuruError`]. Resource helpers sit on top of it:
//! - [`TsuruClient::list_apps`], [`TsuruClient::create_app`], ...
//! - [`TsuruClient::create_app_envs`], [`TsuruClient::delete_app_envs`]
//! - [`TsuruClient::create_app_cname`], [`TsuruClient::delete_app_cname`]
//! - [`TsuruClient::deploy_app`]
//! - [`TsuruClient::list_plans`]

mod apps;
mod client;
mod error;
mod options;
mod params;
mod plans;
mod types;

pub use apps::deploy_form;
pub use client::{endpoint_url, TsuruClient};
pub use error::TsuruError;
pub use options::ClientOptions;
pub use params::Params;
pub use types::{
    Address, App, AppCname, AppDeploy, AppEnv, CreateAppEnv, Entrypoint, Lock, Plan, Router,
    Unit, UpdateAppRequest,
};

pub type Result<T> = std::result::Result<T, TsuruError>;
