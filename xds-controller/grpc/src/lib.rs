#![deny(warnings, rust_2018_idioms)]
#![forbid(unsafe_code)]

mod stream;

pub mod ads;
