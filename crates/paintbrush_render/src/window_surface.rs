//! Window-backed drawing surface
//!
//! Drawing goes to a software [`Canvas`]; presenting uploads the canvas and
//! blits it to the swapchain. The canvas is the only copy of the drawing, so
//! a lost swapchain costs a frame, never the picture.

use std::sync::Arc;
use paintbrush_core::{Canvas, Color, Rect, Surface, SurfaceError};
use winit::window::Window;

use crate::context::{RenderContext, RenderError};
use crate::pipeline::BlitPipeline;

/// [`Surface`] that shows a canvas in a winit window
pub struct WindowSurface {
    canvas: Canvas,
    context: RenderContext,
    pipeline: BlitPipeline,
}

impl WindowSurface {
    /// Create a `width × height` canvas presented to `window`
    pub fn new(
        window: Arc<Window>,
        width: u32,
        height: u32,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::new(window, vsync))?;
        let pipeline = BlitPipeline::new(&context.device, context.format(), width, height);
        log::info!(
            "Created {}x{} canvas ({:?} swapchain)",
            width,
            height,
            context.format()
        );

        Ok(Self {
            canvas: Canvas::new(width, height),
            context,
            pipeline,
        })
    }
}

impl Surface for WindowSurface {
    fn size(&self) -> (u32, u32) {
        self.canvas.size()
    }

    fn fill(&mut self, color: Color) {
        self.canvas.fill(color);
    }

    fn draw_rect(&mut self, color: Color, rect: Rect) {
        self.canvas.draw_rect(color, rect);
    }

    fn present(&mut self) -> Result<(), SurfaceError> {
        // Minimized: keep drawing into the canvas, show it later
        if !self.context.sync_with_window() {
            return Ok(());
        }

        self.pipeline.upload(&self.context.queue, &self.canvas);

        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost, reconfiguring");
                self.context.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("Surface timeout, skipping frame");
                return Ok(());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(SurfaceError::OutOfMemory),
            #[allow(unreachable_patterns)]
            Err(e) => return Err(SurfaceError::Other(e.to_string())),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Present Encoder"),
            });

        self.pipeline.render(&mut encoder, &view);

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}
