//! Theme - Brand Palette

pub mod colors;
