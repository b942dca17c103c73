//! Shared library module for the Crosses app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod action;
pub mod action_handler;
pub mod app;
pub mod persistence;
pub mod state;
pub mod ui;
pub mod version;
pub mod view_model_builder;

pub use self::app::CrossesApp;
