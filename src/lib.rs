#![doc = include_str!("RUSTDOC.md")]

pub mod container;
pub mod notifications;
pub mod records;
pub mod remote;
