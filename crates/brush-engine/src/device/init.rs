/// Initialization parameters for the GPU layer.
///
/// Device features and limits are not configurable: presenting a canvas
/// needs no optional features, and limits follow the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    ///
    /// Canvas bytes are sRGB encoded; an sRGB surface keeps them unchanged
    /// on screen.
    pub prefer_srgb: bool,

    /// FIFO waits for vertical blank, which paces the application loop.
    pub present_mode: wgpu::PresentMode,

    /// Falls back to a supported mode when unset or unsupported.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Hint only; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,
}

impl GpuInit {
    /// Presents without waiting for vertical blank where supported.
    pub fn unpaced() -> Self {
        Self {
            present_mode: wgpu::PresentMode::AutoNoVsync,
            ..Self::default()
        }
    }
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            desired_maximum_frame_latency: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_vsynced_srgb() {
        let init = GpuInit::default();
        assert!(init.prefer_srgb);
        assert_eq!(init.present_mode, wgpu::PresentMode::Fifo);
        assert_eq!(init.alpha_mode, None);
    }

    #[test]
    fn unpaced_only_changes_present_mode() {
        let init = GpuInit::unpaced();
        assert_eq!(init.present_mode, wgpu::PresentMode::AutoNoVsync);
        assert_eq!(
            GpuInit { present_mode: wgpu::PresentMode::Fifo, ..init },
            GpuInit::default()
        );
    }
}
