//! Error types for glyph-swarm.
//!
//! The simulation core is total over its inputs and never fails. Errors only
//! come from the edges: loading configuration or fonts, and bringing up the
//! window and GPU.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during GPU initialization.
#[derive(Debug, Error)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    #[error("Failed to create GPU surface: {0}")]
    SurfaceCreation(#[from] wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    #[error("No compatible GPU adapter found. Ensure your system has a GPU with WebGPU/Vulkan/Metal/DX12 support.")]
    NoAdapter,
    /// Failed to create GPU device.
    #[error("Failed to create GPU device: {0}")]
    DeviceCreation(#[from] wgpu::RequestDeviceError),
}

/// Errors that can occur while loading a font file.
#[derive(Debug, Error)]
pub enum FontError {
    /// Failed to read the font file from disk.
    #[error("Failed to read font file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The font data could not be parsed.
    #[error("Failed to parse font: {0}")]
    Parse(String),
    /// The crate was built without TrueType support.
    #[error("TrueType fonts require the `ttf` feature")]
    Unsupported,
}

/// Errors that can occur while loading or validating a scene configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The configuration file is not valid JSON for a scene.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value is outside the range the simulation accepts.
    #[error("Invalid config value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Errors that can occur when running the windowed animation.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to create event loop.
    #[error("Failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    /// Failed to create window.
    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    /// GPU initialization failed.
    #[error("GPU error: {0}")]
    Gpu(#[from] GpuError),
}
