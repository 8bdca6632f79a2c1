#![allow(dead_code)]
#![allow(unused_imports)]

pub mod generate;
pub use generate::*;

pub mod dict;
pub use dict::*;
