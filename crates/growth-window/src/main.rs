// File: crates/growth-window/src/main.rs
// Summary: Interactive growth chart window; renders growth-core frames to a winit window via RGBA blit (CPU) using softbuffer.
// Keys: Up/Down rate, Left/Right years, PgUp/PgDn principal, +/- contribution,
//       C compounding, F contribution frequency, T theme, S save PNG, P export, Esc quit.

mod controls;

use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use growth_core::{AppConfig, AppEvent, AppState, ChartRenderer, ExportReport, ThemeMode, ThemeStore, Viewport, Wakeup};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use controls::{action_for_key, Action};

/// Roughly one display frame.
const FRAME: Duration = Duration::from_millis(16);

#[derive(Parser, Debug)]
#[command(name = "growth-window", about = "Interactive compound interest chart")]
struct Args {
    /// JSON launch config (missing file = defaults).
    #[arg(long, default_value = "growth.json")]
    config: PathBuf,
    /// Directory for exported reports and PNG snapshots.
    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    let _ = growth_core::telemetry::init_default_tracing();
    let args = Args::parse();
    let config = AppConfig::load(&args.config)
        .with_context(|| format!("failed to load config '{}'", args.config.display()))?;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Compound Interest Graph")
        .with_inner_size(LogicalSize::new(config.window_width as f64, config.window_height as f64))
        .build(&event_loop)
        .context("build window")?;

    let theme_store = ThemeStore::new(&config.theme_file);
    let system_theme = window.theme().map(|t| match t {
        winit::window::Theme::Dark => ThemeMode::Dark,
        winit::window::Theme::Light => ThemeMode::Light,
    });
    let theme = ThemeMode::resolve(theme_store.load(), system_theme);

    let size = window.inner_size();
    let viewport = Viewport::from_physical(size.width, size.height, window.scale_factor());
    let mut state = AppState::new(config.inputs.clone(), theme, viewport);
    window.set_title(&state.status_text());

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;
    let renderer = ChartRenderer::new();

    tracing::info!(theme = %theme, "window ready");

    event_loop.run(move |event, _, control_flow| {
        let now = Instant::now();
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    let vp = Viewport::from_physical(new_size.width, new_size.height, window.scale_factor());
                    if state.update(AppEvent::Resized(vp), now).redraw {
                        window.request_redraw();
                    }
                }
                WindowEvent::ScaleFactorChanged { scale_factor, new_inner_size } => {
                    let vp = Viewport::from_physical(new_inner_size.width, new_inner_size.height, scale_factor);
                    state.update(AppEvent::Resized(vp), now);
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let x = (position.x / window.scale_factor()) as f32;
                    state.update(AppEvent::PointerMoved { x }, now);
                }
                WindowEvent::CursorLeft { .. } => {
                    if state.update(AppEvent::PointerLeft, now).redraw {
                        window.request_redraw();
                    }
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => match action_for_key(key, state.raw()) {
                    Some(Action::App(ev)) => {
                        let out = state.update(ev, now);
                        if out.theme_changed {
                            if let Err(e) = theme_store.save(state.theme()) {
                                tracing::warn!(error = %e, "could not persist theme");
                            }
                        }
                        if out.redraw {
                            window.request_redraw();
                        }
                    }
                    Some(Action::Export) => {
                        if let Err(e) = export(&state, &renderer, &args.out_dir) {
                            tracing::warn!(error = %e, "export failed");
                        }
                    }
                    Some(Action::SavePng) => {
                        let path = args.out_dir.join("growth_chart.png");
                        match renderer.render_to_png(&state.chart(), &state.export_render_options(), &path) {
                            Ok(()) => tracing::info!(path = %path.display(), "chart saved"),
                            Err(e) => tracing::warn!(error = %e, "saving chart failed"),
                        }
                    }
                    Some(Action::Quit) => *control_flow = ControlFlow::Exit,
                    None => {}
                },
                _ => {}
            },
            Event::MainEventsCleared => {
                let out = state.update(AppEvent::Frame, now);
                if out.recomputed {
                    window.set_title(&state.status_text());
                }
                if out.redraw {
                    window.request_redraw();
                }
                if *control_flow != ControlFlow::Exit {
                    *control_flow = match state.next_wakeup() {
                        Wakeup::NextFrame => ControlFlow::WaitUntil(now + FRAME),
                        Wakeup::At(due) => ControlFlow::WaitUntil(due),
                        Wakeup::Idle => ControlFlow::Wait,
                    };
                }
            }
            Event::RedrawRequested(_) => {
                if let Err(e) = present(&window, &mut surface, &renderer, &state) {
                    tracing::warn!(error = %e, "present failed");
                }
            }
            _ => {}
        }
    })
}

/// Render the current state and copy it into the window's softbuffer.
fn present(
    window: &Window,
    surface: &mut softbuffer::Surface,
    renderer: &ChartRenderer,
    state: &AppState,
) -> Result<()> {
    let size = window.inner_size();
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(());
    };
    surface.resize(w, h).map_err(|e| anyhow!("resize surface: {e}"))?;

    // Render at the window's physical size so the blit is 1:1.
    let mut opts = state.render_options(true);
    opts.viewport = Viewport::from_physical(size.width, size.height, window.scale_factor());
    let (rgba, pw, ph, _) = renderer.render_to_rgba8(&state.chart(), &opts)?;

    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("surface buffer: {e}"))?;
    let max_px = frame.len().min(rgba.len() / 4).min((pw as usize) * (ph as usize));
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)).take(max_px) {
        // softbuffer expects 0RGB
        *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
    }
    frame.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}

fn export(state: &AppState, renderer: &ChartRenderer, out_dir: &std::path::Path) -> Result<()> {
    let png = renderer.render_to_png_bytes(&state.chart(), &state.export_render_options())?;
    let report = ExportReport::new(state.outcome(), &png)?;
    let path = out_dir.join(format!("growth_report_{}.html", report.generated_at.format("%Y%m%d_%H%M%S")));
    report.write(&path)?;
    println!("Wrote {} (open it to print)", path.display());
    Ok(())
}
