// file: src/parser/mod.rs
// description: frontmatter and markdown parsing module exports
// reference: internal module structure

pub mod frontmatter;
pub mod markdown;

pub use frontmatter::{Frontmatter, FrontmatterParser};
pub use markdown::{Heading, MarkdownRenderer};
