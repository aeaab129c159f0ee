// src/utils/mod.rs

pub mod extract;
pub mod html;
pub mod time;
