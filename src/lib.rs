//! Library entry for Aklatell exposing the catalog controller and its surfaces
//! for the binary and integration tests.

pub mod app;
pub mod args;
pub mod events;
pub mod logic;
pub mod render;
pub mod sources;
pub mod state;
pub mod storage;
pub mod theme;
pub mod ui;
