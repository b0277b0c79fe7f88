//! Core functionality for the research gateway

pub mod research;
