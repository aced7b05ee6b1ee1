//! Command implementations

pub mod dispatch;

mod edge;
mod export;
mod graphs;
mod info;
mod menu;
mod node;
mod traverse;
