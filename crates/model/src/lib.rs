#![no_std]
extern crate alloc;

pub mod completion;
pub mod event;
pub mod message;
pub mod quiz;
