pub mod app;
pub mod config;
pub mod dungeon;
pub mod generators;
pub mod rng;
pub mod solvers;
