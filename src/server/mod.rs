//! HTTP surface for browser front ends

pub mod api;
