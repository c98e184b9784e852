//! Readyscope - AR/VR developer readiness assessment
//!
//! A local-first terminal tool that presents the fixed fifteen-question
//! readiness questionnaire, scores the answers with the WISCAR framework,
//! and renders the result with narrative feedback. The scoring engine is
//! a pure, deterministic function over the answer sequence and the static
//! catalog/config tables.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod models;
pub mod reporters;
pub mod scoring;
pub mod store;
