//! Command modules for the browser-profiles CLI.
//!
//! - `profiles_cmd`: listing, inspecting and rendering the profile set

pub mod profiles_cmd;
