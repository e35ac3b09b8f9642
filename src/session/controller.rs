//! The session controller.

use crate::ascii::{EffectOptions, GLYPH_RAMP};
use crate::media::{
    FacingMode, MediaError, MediaSource, MediaStream, Resolution, StreamConstraints,
    StreamMetadata,
};
use crate::palette::{ColorPair, ColorScheme};
use crate::scene::{PlaneGeometry, Viewport};
use crate::ui::{Controls, Document, Header};

use super::error::SessionError;
use super::pipeline::Pipeline;
use super::state::{RenderLoop, SessionState};

/// Initial session configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    pub facing_mode: FacingMode,
    pub resolution_factor: f32,
    pub color_scheme: ColorScheme,
    pub invert: bool,
    pub ramp: Vec<char>,
    /// Requested on every acquisition
    pub ideal_resolution: Resolution,
    pub header_visible: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            facing_mode: FacingMode::Front,
            resolution_factor: crate::ascii::DEFAULT_RESOLUTION,
            color_scheme: ColorScheme::Classic,
            invert: false,
            ramp: GLYPH_RAMP.to_vec(),
            ideal_resolution: Resolution::IDEAL,
            header_visible: true,
        }
    }
}

/// Owns the camera stream, the render pipeline and the display state, and
/// keeps them consistent across UI actions.
///
/// Invariant: a stream is held exactly while the session is running.
pub struct Session<M: MediaSource> {
    media: M,
    facing_mode: FacingMode,
    state: SessionState,
    resolution_factor: f32,
    color_scheme: ColorScheme,
    invert: bool,
    ramp: Vec<char>,
    ideal_resolution: Resolution,
    active_stream: Option<M::Stream>,
    stream_metadata: Option<StreamMetadata>,
    pipeline: Option<Pipeline>,
    render_loop: RenderLoop,
    viewport: Viewport,
    document: Document,
}

impl<M: MediaSource> Session<M> {
    pub fn new(media: M, settings: SessionSettings, viewport: Viewport) -> Self {
        let controls = Controls::new(
            settings.resolution_factor,
            settings.color_scheme,
            settings.invert,
        );
        let header = Header::with_visibility(settings.header_visible);
        Self {
            media,
            facing_mode: settings.facing_mode,
            state: SessionState::Stopped,
            // The slider bounds what the factor can be
            resolution_factor: controls.resolution.value(),
            color_scheme: settings.color_scheme,
            invert: settings.invert,
            ramp: settings.ramp,
            ideal_resolution: settings.ideal_resolution,
            active_stream: None,
            stream_metadata: None,
            pipeline: None,
            render_loop: RenderLoop::default(),
            viewport,
            document: Document::new(controls, header),
        }
    }

    /// Acquire the camera and begin rendering.
    ///
    /// On failure the error is also shown in the error area and the session
    /// stays stopped with Start enabled.
    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.state == SessionState::Running {
            let err = SessionError::AlreadyRunning;
            log::warn!("Ignoring start: {}", err);
            self.document.error_area.show(err.to_string());
            return Err(err);
        }

        self.document.error_area.hide();
        self.state = SessionState::Starting;
        log::info!(
            "Starting {} camera (ideal {})",
            self.facing_mode,
            self.ideal_resolution
        );

        let metadata = match self.init_camera() {
            Ok(meta) => meta,
            Err(err) => {
                log::warn!("Camera start failed: {}", err);
                self.state = SessionState::Stopped;
                self.document.controls.set_running(false);
                self.document.error_area.show(err.to_string());
                return Err(err);
            }
        };

        self.init_pipeline(metadata);
        self.render_loop.schedule();
        self.state = SessionState::Running;
        self.document.controls.set_running(true);
        log::info!(
            "Session running: stream {}, viewport {}",
            metadata.resolution,
            self.viewport
        );
        Ok(())
    }

    /// Release the stream and stop rendering. Safe to call when stopped.
    pub fn stop(&mut self) {
        let was_running = self.state != SessionState::Stopped;
        self.stop_stream();
        self.render_loop.cancel();
        self.document.container.clear();
        self.pipeline = None;
        self.stream_metadata = None;
        self.state = SessionState::Stopped;
        self.document.controls.set_running(false);
        if was_running {
            log::info!("Session stopped");
        }
    }

    /// Switch between the front and back cameras.
    ///
    /// Does nothing when not running. If the new camera cannot be acquired
    /// the facing mode is restored and the previous camera re-acquired; if
    /// that fails too, the session stops.
    pub fn switch_camera(&mut self) -> Result<(), SessionError> {
        if self.state != SessionState::Running {
            return Ok(());
        }

        let previous = self.facing_mode;
        self.facing_mode = previous.flipped();
        log::info!("Switching camera: {} -> {}", previous, self.facing_mode);

        self.stop_stream();

        match self.init_camera() {
            Ok(meta) => {
                self.on_stream_changed(meta);
                Ok(())
            }
            Err(cause) => {
                self.facing_mode = previous;
                let err = SessionError::SwitchFailed(Box::new(cause));
                log::warn!("{}", err);
                self.document.error_area.show(err.to_string());

                match self.init_camera() {
                    Ok(meta) => self.on_stream_changed(meta),
                    Err(rollback) => {
                        log::warn!("Could not restore {} camera: {}", previous, rollback);
                        self.stop();
                    }
                }
                Err(err)
            }
        }
    }

    /// Rebuild the effect at a new density factor.
    ///
    /// The renderer and scene are kept; the effect and its surface are
    /// replaced. While stopped the factor is only recorded. The slider
    /// follows the factor; the effect uses the factor as given.
    pub fn update_resolution(&mut self, factor: f32) {
        log::debug!("Resolution factor {} -> {}", self.resolution_factor, factor);
        self.resolution_factor = factor;
        self.document.controls.resolution.set(factor);
        self.rebuild_effect();
    }

    /// Move the density slider one step and apply its value.
    pub fn step_resolution(&mut self, up: bool) {
        let slider = &mut self.document.controls.resolution;
        let value = if up { slider.step_up() } else { slider.step_down() };
        if value != self.resolution_factor {
            self.update_resolution(value);
        }
    }

    /// Style the attached surface with the current scheme.
    pub fn apply_color_scheme(&mut self) {
        let colors = self.current_colors();
        if let Some(surface) = self.document.container.surface_mut() {
            surface.set_style(colors);
        }
    }

    /// Select a scheme and apply it.
    pub fn set_color_scheme(&mut self, scheme: ColorScheme) {
        self.color_scheme = scheme;
        self.document.controls.scheme = scheme;
        self.apply_color_scheme();
    }

    /// Flip the glyph ramp and colors. Rebuilds the effect like a density
    /// change.
    pub fn set_invert(&mut self, invert: bool) {
        self.invert = invert;
        self.document.controls.invert = invert;
        self.rebuild_effect();
    }

    /// Follow a change of the display size.
    pub fn on_window_resize(&mut self, viewport: Viewport) {
        log::debug!("Viewport {} -> {}", self.viewport, viewport);
        self.viewport = viewport;
        let aspect = self
            .stream_metadata
            .and_then(|meta| meta.resolution.aspect());
        if let Some(pipeline) = self.pipeline.as_mut() {
            pipeline.resize(viewport, aspect);
        }
    }

    /// Show or hide the header. Display only.
    pub fn toggle_header(&mut self) {
        self.document.header.toggle();
    }

    /// One iteration of the render loop.
    ///
    /// Returns `false` without drawing when the loop is not scheduled.
    pub fn animate(&mut self) -> bool {
        if !self.render_loop.is_scheduled() {
            return false;
        }
        let Some(pipeline) = self.pipeline.as_mut() else {
            return false;
        };
        let Some(surface) = self.document.container.surface_mut() else {
            return false;
        };

        if let Some(frame) = self.active_stream.as_ref().and_then(|s| s.latest_frame()) {
            pipeline.scene.texture_mut().upload(frame);
        }
        pipeline.render_into(surface);
        self.render_loop.record_frame();
        true
    }

    // ---- accessors ----

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn facing_mode(&self) -> FacingMode {
        self.facing_mode
    }

    pub fn resolution_factor(&self) -> f32 {
        self.resolution_factor
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.color_scheme
    }

    pub fn invert(&self) -> bool {
        self.invert
    }

    pub fn has_active_stream(&self) -> bool {
        self.active_stream.is_some()
    }

    pub fn stream_metadata(&self) -> Option<StreamMetadata> {
        self.stream_metadata
    }

    pub fn is_render_scheduled(&self) -> bool {
        self.render_loop.is_scheduled()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.render_loop.frames()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Geometry of the video plane while a pipeline exists.
    pub fn plane_geometry(&self) -> Option<PlaneGeometry> {
        self.pipeline.as_ref().map(|p| p.scene.plane.geometry)
    }

    pub fn texture_needs_update(&self) -> Option<bool> {
        self.pipeline
            .as_ref()
            .map(|p| p.scene.plane.texture.needs_update())
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    // ---- internals ----

    fn effect_options(&self) -> EffectOptions {
        EffectOptions {
            invert: self.invert,
            resolution: self.resolution_factor,
        }
    }

    fn current_colors(&self) -> ColorPair {
        let colors = self.color_scheme.colors();
        if self.invert {
            colors.swapped()
        } else {
            colors
        }
    }

    /// Acquire, wait for metadata and play. A stream that fails after
    /// acquisition is released before returning.
    fn init_camera(&mut self) -> Result<StreamMetadata, SessionError> {
        let constraints = StreamConstraints::new(self.facing_mode, self.ideal_resolution);
        let mut stream = self.media.acquire(&constraints)?;

        match prepare_stream(&mut stream) {
            Ok(meta) => {
                log::debug!("Stream ready: {} ({:?} fps)", meta.resolution, meta.fps);
                self.active_stream = Some(stream);
                self.stream_metadata = Some(meta);
                Ok(meta)
            }
            Err(err) => {
                self.media.release(stream);
                Err(err.into())
            }
        }
    }

    fn init_pipeline(&mut self, metadata: StreamMetadata) {
        let pipeline = Pipeline::build(
            self.viewport,
            metadata.resolution.aspect(),
            &self.ramp,
            self.effect_options(),
        );
        let surface = pipeline.effect.create_surface();
        self.pipeline = Some(pipeline);
        self.document.container.replace(surface);
        self.apply_color_scheme();
    }

    fn rebuild_effect(&mut self) {
        let options = self.effect_options();
        let Some(pipeline) = self.pipeline.as_mut() else {
            return;
        };
        let surface = pipeline.replace_effect(&self.ramp, options, self.viewport);
        self.document.container.replace(surface);
        self.apply_color_scheme();
    }

    fn on_stream_changed(&mut self, metadata: StreamMetadata) {
        let viewport = self.viewport;
        if let Some(pipeline) = self.pipeline.as_mut() {
            pipeline.scene.texture_mut().mark_needs_update();
            pipeline.resize(viewport, metadata.resolution.aspect());
        }
    }

    fn stop_stream(&mut self) {
        if let Some(stream) = self.active_stream.take() {
            self.media.release(stream);
        }
        self.stream_metadata = None;
    }
}

impl<M: MediaSource> Drop for Session<M> {
    fn drop(&mut self) {
        self.stop_stream();
    }
}

fn prepare_stream<S: MediaStream>(stream: &mut S) -> Result<StreamMetadata, MediaError> {
    let meta = stream.wait_for_metadata()?;
    stream.play()?;
    Ok(meta)
}

impl<M: MediaSource> std::fmt::Debug for Session<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("facing_mode", &self.facing_mode)
            .field("resolution_factor", &self.resolution_factor)
            .field("color_scheme", &self.color_scheme)
            .field("invert", &self.invert)
            .field("has_stream", &self.active_stream.is_some())
            .finish_non_exhaustive()
    }
}
