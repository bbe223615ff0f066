pub mod canvas;
pub mod config;
pub mod line;
pub mod particle;
pub mod pointer;
