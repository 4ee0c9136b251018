mod scene;

use anyhow::Result;

use brush_engine::core::AppLoop;
use brush_engine::logging::{init_logging, LoggingConfig};
use brush_engine::painter::Painter;
use brush_engine::window::{Platform, WindowConfig};

use scene::ExampleScene;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut platform = Platform::new()?;
    let window = platform.open_window(WindowConfig::new("Example - Painter", 1280, 720))?;
    let painter = Painter::new(window);

    let frames = AppLoop::new(platform, painter).run(&mut ExampleScene::default())?;
    log::info!("exiting after {frames} frames");
    Ok(())
}
