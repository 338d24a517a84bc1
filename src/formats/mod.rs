//! Concrete document variants

pub mod excel;
pub mod pdf;
pub mod word;
