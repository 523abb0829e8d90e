//! Host-side helper.
//!
//! `serve` builds the WASM bundle into `static/pkg` and serves `static/`
//! locally. `simulate` drives the clock wall headlessly from a chosen start
//! time and logs every mode change.

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    host::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod host {
    use std::path::PathBuf;
    use std::process::{Command, Stdio};

    use anyhow::{bail, Context};
    use chrono::{Local, NaiveTime, TimeDelta};
    use clap::{Parser, Subcommand};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use clock_of_clocks::{
        ClockDisplay, DisplayConfig, Layout, Point, Renderer, SimulatedClock, Stroke, WallClock,
    };

    #[derive(Parser)]
    #[command(name = "clock_of_clocks")]
    #[command(about = "Serve or simulate the clock-of-clocks display")]
    struct Cli {
        #[command(subcommand)]
        command: Cmd,
    }

    #[derive(Subcommand)]
    enum Cmd {
        /// Build the WASM bundle and serve the page on localhost.
        Serve {
            #[arg(short, long, default_value_t = 8000)]
            port: u16,
        },
        /// Run the display without a browser.
        Simulate {
            /// Wall time of the first frame, HH:MM:SS.
            #[arg(short, long, value_parser = parse_time)]
            start: NaiveTime,
            #[arg(short, long, default_value_t = 1800)]
            frames: u32,
            #[arg(long, default_value_t = 0)]
            seed: u64,
            /// JSON display configuration.
            #[arg(short, long)]
            config: Option<PathBuf>,
            #[arg(short, long, default_value_t = 2000.0)]
            width: f64,
        },
    }

    fn parse_time(s: &str) -> Result<NaiveTime, String> {
        NaiveTime::parse_from_str(s, "%H:%M:%S").map_err(|e| format!("expected HH:MM:SS: {e}"))
    }

    /// Counts primitives instead of drawing them.
    #[derive(Debug, Default)]
    struct CountingRenderer {
        frames: u64,
        circles: u64,
        lines: u64,
    }

    impl Renderer for CountingRenderer {
        fn background(&mut self, _gray: u8) {
            self.frames += 1;
        }

        fn rect(&mut self, _origin: Point, _width: f64, _height: f64, _stroke: Stroke) {}

        fn circle(&mut self, _center: Point, _diameter: f64, _stroke: Stroke) {
            self.circles += 1;
        }

        fn line(&mut self, _from: Point, _to: Point, _stroke: Stroke) {
            self.lines += 1;
        }
    }

    pub fn run() -> anyhow::Result<()> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        match Cli::parse().command {
            Cmd::Serve { port } => serve(port),
            Cmd::Simulate {
                start,
                frames,
                seed,
                config,
                width,
            } => simulate(start, frames, seed, config, width),
        }
    }

    fn serve(port: u16) -> anyhow::Result<()> {
        log::info!("building WASM pkg");
        let status = Command::new("wasm-pack")
            .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
            .status()
            .context("wasm-pack not found in PATH (https://rustwasm.github.io/wasm-pack/)")?;
        if !status.success() {
            bail!("wasm-pack finished with errors");
        }

        log::info!("serving static/ at http://127.0.0.1:{port}");
        let status = Command::new("python3")
            .args(["-m", "http.server", &port.to_string(), "--directory", "static"])
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .status()
            .context("failed to start http server")?;
        if !status.success() {
            bail!("http server exited with {status}");
        }
        Ok(())
    }

    fn simulate(
        start: NaiveTime,
        frames: u32,
        seed: u64,
        config: Option<PathBuf>,
        width: f64,
    ) -> anyhow::Result<()> {
        let config = match config {
            Some(path) => {
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?;
                DisplayConfig::from_json(&json).with_context(|| format!("parsing {}", path.display()))?
            }
            None => DisplayConfig::default(),
        };
        let frame = TimeDelta::microseconds(1_000_000 / i64::from(config.frame_rate));

        let clock = SimulatedClock::new(Local::now().date_naive().and_time(start));
        let layout = Layout::new(width)?;
        let mut display = ClockDisplay::new(config, StdRng::seed_from_u64(seed))?;
        let mut renderer = CountingRenderer::default();

        for n in 0..frames {
            let now = clock.now();
            let tick = display.tick(now, &layout, &mut renderer)?;
            if tick.entered {
                log::info!("frame {n} at {}: entered {}", now.time(), tick.mode);
            }
            clock.advance(frame);
        }

        log::info!(
            "{} frames drawn ({} clock faces, {} hands), ending at {}",
            renderer.frames,
            renderer.circles,
            renderer.lines,
            clock.now().time()
        );
        Ok(())
    }
}
