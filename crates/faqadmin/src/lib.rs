//! `faqadmin` - Admin tooling for a chatbot's FAQ collection
//!
//! This library provides the core functionality for curating the JSON file of
//! question/answer pairs an admission chatbot serves from: a typed entry
//! model, a file-backed store with full load-mutate-save cycles, and the
//! interactive terminal screen the administrator drives.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod faq;
pub mod logging;
pub mod store;
pub mod ui;

pub use config::Config;
pub use error::{Error, Result};
pub use faq::{FaqEntry, Language};
pub use logging::init_logging;
pub use store::FaqStore;
