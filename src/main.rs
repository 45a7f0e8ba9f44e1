//! Hyperview - tesseract projection
//!
//! Projects a rotating tesseract from 4D into 3D and prints each frame's
//! vertices to stdout, one `index x y z` line per vertex.

use std::io::{self, Write};
use std::process::ExitCode;

use hyperview::config::AppConfig;
use hyperview::systems::{FrameDriver, ProjectedFrame};

fn write_frame(out: &mut impl Write, frame: &ProjectedFrame) -> io::Result<()> {
    let [sxy, syz, szx, sxw, syw, szw] = frame.angles.sliders();
    writeln!(
        out,
        "# frame {} xy={} yz={} zx={} xw={} yw={} zw={}",
        frame.index,
        frame.angles.xy,
        frame.angles.yz,
        frame.angles.zx,
        frame.angles.xw,
        frame.angles.yw,
        frame.angles.zw,
    )?;
    writeln!(
        out,
        "# sliders {:.4} {:.4} {:.4} {:.4} {:.4} {:.4}",
        sxy, syz, szx, sxw, syw, szw,
    )?;
    for (i, p) in frame.points.iter().enumerate() {
        writeln!(out, "{} {:.6} {:.6} {:.6}", i, p.x, p.y, p.z)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    // Config is read before logging so its log level can seed the filter
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.debug.log_level))
        .init();

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting Hyperview");

    let mut driver = match FrameDriver::from_config(&config) {
        Ok(driver) => driver,
        Err(e) => {
            log::error!("Invalid view configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    log::info!(
        "Projecting {} frame(s) in {:?}, {} edges, {} line and {} triangle indices",
        config.run.frames,
        driver.mode(),
        driver.indices().edges.len(),
        driver.indices().lines.len(),
        driver.indices().triangles.len(),
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for _ in 0..config.run.frames {
        let frame = match driver.step(config.run.frame_dt) {
            Ok(frame) => frame,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        };

        if let Err(e) = write_frame(&mut out, &frame) {
            log::error!("Failed to write frame {}: {}", frame.index, e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
