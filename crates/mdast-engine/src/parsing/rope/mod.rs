pub mod lines;

pub use lines::source_lines;
