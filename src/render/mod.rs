// file: src/render/mod.rs
// description: page rendering module exports
// reference: internal module structure

pub mod templates;
pub mod writer;

pub use templates::TemplateRenderer;
pub use writer::{RenderedPage, RenderingSink, output_file, write_pages};
