use fractal_zoom::{PngFramePresenter, ZoomConfig, ZoomController};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let presenter = PngFramePresenter::default();
    let controller = ZoomController::new(ZoomConfig::default(), presenter);

    let summary = controller.run()?;

    log::info!(
        "Done: {} frames written, {} skipped, {:?} elapsed",
        summary.frames_written,
        summary.skipped_frames.len(),
        summary.elapsed
    );

    Ok(())
}
