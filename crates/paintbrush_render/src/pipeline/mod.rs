//! Rendering pipeline components

pub mod blit_pipeline;
pub mod types;

pub use blit_pipeline::BlitPipeline;
pub use types::{QuadVertex, QUAD_INDICES, QUAD_VERTICES};
