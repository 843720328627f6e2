//! Pages module
//! Full-window backdrops behind the player chrome

pub mod listen_now;
