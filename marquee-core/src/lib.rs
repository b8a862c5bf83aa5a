//! Catalog client and home dashboard loader.
//!
//! [`ContentClient`] wraps the TMDB v3 REST API. [`HomeFeed`] turns a row
//! layout into the ordered rows of the home screen, and [`DashboardLoader`]
//! drives the one-shot `Loading -> Loaded | Error` lifecycle on top of any
//! [`CatalogSource`].

pub mod client;
pub mod dashboard;
pub mod error;
pub mod home;
mod query;
pub mod source;

pub use client::ContentClient;
pub use dashboard::{
    Dashboard, DashboardLoader, DashboardMount, DashboardState,
    LOAD_FAILURE_MESSAGE, select_hero,
};
pub use error::{ContentError, GENERIC_FAILURE_MESSAGE};
pub use home::HomeFeed;
pub use query::DETAILS_APPEND;
pub use source::CatalogSource;
