// Core support modules: configuration and geometry

pub mod config;
pub mod geometry;
