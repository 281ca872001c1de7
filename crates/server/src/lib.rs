#[cfg(feature = "server")]
pub mod config;

#[cfg(feature = "server")]
pub mod dataset;

#[cfg(feature = "server")]
pub mod countries;

pub mod api;

#[cfg(feature = "server")]
pub mod rest;

#[cfg(feature = "server")]
pub mod openapi;

#[cfg(feature = "server")]
pub mod error_convert;

#[cfg(feature = "server")]
pub mod health;
