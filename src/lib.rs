//! A wheel of names: keep a list of options, spin, and let the pointer pick
//! one.

pub mod cli;
pub mod command;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod i18n;
pub mod logger;
pub mod options;
pub mod session;
pub mod state;
pub mod svg;
pub mod theme;
pub mod view;
