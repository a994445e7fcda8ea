//! Translation Microservice
//!
//! A REST API that translates short texts through a static phrase table or the
//! Google Translate API, and logs every translation for later statistics.

pub mod api;
pub mod config;
pub mod error;
pub mod log_store;
pub mod models;
pub mod phrasebook;
pub mod provider;
pub mod translator;
pub mod validators;
