/// A single acquired frame.
///
/// Short-lived: holding the surface texture blocks acquisition of the next
/// frame. Finish it with [`Gpu::submit`](super::Gpu::submit).
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
