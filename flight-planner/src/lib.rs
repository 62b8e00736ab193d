//! Flight route planner.
//!
//! Loads a catalog of scheduled flights and answers routing questions over
//! it: which airports can be reached from here, is there a direct or
//! one-stop route, and what is the fastest or cheapest way to get there
//! inside a travel window. Queries are served from a line-oriented console
//! or over HTTP.

pub mod catalog;
pub mod config;
pub mod console;
pub mod domain;
pub mod planner;
pub mod web;
