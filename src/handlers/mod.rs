// src/handlers/mod.rs

pub mod comment;
pub mod export;
pub mod pages;
pub mod quiz;
pub mod stats;
