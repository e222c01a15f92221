//! Use-Cases der Application-Layer-Orchestrierung.

pub mod playback;
pub mod view;
