//! Developer portfolio rendered client-side with Leptos.
//!
//! The page profiles the visitor's device once at mount and scales its
//! decorative motion to match; see [`perf`].

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod email;
pub mod error;
pub mod logging;
pub mod motion;
pub mod pages;
pub mod perf;
pub mod sections;

pub use app::App;
