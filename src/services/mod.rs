pub mod pipeline;

pub use pipeline::{output_path, render, render_all, render_file};
