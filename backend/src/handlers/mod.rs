//! HTTP request handlers

pub mod application;
pub mod auth;
pub mod business;
pub mod franchise;
pub mod public;
pub mod user;
