pub mod graph;
pub mod io;
pub mod types;
