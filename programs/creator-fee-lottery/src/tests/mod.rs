//! Test modules for the creator-fee lottery engine.

mod common;
mod lifecycle;
