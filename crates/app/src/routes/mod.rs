pub mod demo;
pub mod not_found;

use dioxus::prelude::*;

use demo::Demo;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Demo {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
