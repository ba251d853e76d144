// Library for generating nuclear-attraction integral test inputs

pub mod basis;
pub mod config;
pub mod generator;
pub mod io;
pub mod randomgen;
