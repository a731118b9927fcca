//! Mounted particle field: owns the simulation state for the lifetime of a
//! view and keeps the host's frame callbacks and listeners in step with it.

use crate::debounce::ResizeDebouncer;
use crate::field::ParticleField;
use crate::frame_loop::FrameLoop;
use crate::host::{FrameHandle, Host, ListenerId, ListenerKind};
use crate::params::FieldParams;
use crate::pointer::PointerState;
use particle_physics::Particle;
use std::time::Instant;

pub struct FieldView {
    field: ParticleField,
    pointer: PointerState,
    resize: ResizeDebouncer,
    frames: FrameLoop,
    listeners: Vec<(ListenerKind, ListenerId)>,
    mounted: bool,
}

impl FieldView {
    /// Build the lattice, subscribe to events and start the frame loop.
    ///
    /// Without a usable drawing surface nothing is started and the host is
    /// left untouched.
    pub fn mount<H: Host + ?Sized>(
        host: &mut H,
        surface_available: bool,
        viewport: (f32, f32),
        params: FieldParams,
    ) -> Option<Self> {
        if !surface_available {
            log::warn!("No drawing surface available, particle field not started");
            return None;
        }

        let resize = ResizeDebouncer::new(params.resize_debounce());
        let mut field = ParticleField::new(params);
        field.rebuild(viewport.0, viewport.1);

        let listeners = ListenerKind::ALL
            .iter()
            .map(|&kind| (kind, host.attach_listener(kind)))
            .collect();

        let mut frames = FrameLoop::default();
        frames.start(host);

        log::info!(
            "✓ Particle field mounted: {}x{} viewport, {} particles",
            viewport.0,
            viewport.1,
            field.len()
        );

        Some(Self {
            field,
            pointer: PointerState::default(),
            resize,
            frames,
            listeners,
            mounted: true,
        })
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.pointer.move_to(x, y);
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer.leave();
    }

    /// Queue a lattice rebuild; bursts of resizes collapse into one
    pub fn on_resize(&mut self, width: f32, height: f32, now: Instant) {
        self.resize.schedule((width, height), now);
    }

    /// Run one update pass for a fired frame and schedule the next.
    ///
    /// Returns false for frames that do not belong to the running loop; the
    /// field is not touched in that case.
    pub fn on_frame<H: Host + ?Sized>(
        &mut self,
        handle: FrameHandle,
        now: Instant,
        host: &mut H,
    ) -> bool {
        if !self.frames.on_frame(handle, host) {
            return false;
        }

        if let Some((width, height)) = self.resize.poll(now) {
            self.field.rebuild(width, height);
            log::info!(
                "Viewport resized to {}x{}: {} particles",
                width,
                height,
                self.field.len()
            );
        }

        self.field.step(&self.pointer);
        true
    }

    /// Stop the frame loop and detach every listener
    pub fn unmount<H: Host + ?Sized>(mut self, host: &mut H) {
        self.frames.stop(host);
        for (_, id) in self.listeners.drain(..) {
            host.detach_listener(id);
        }
        self.resize.cancel();
        self.mounted = false;
        log::info!("Particle field unmounted");
    }

    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.listeners.iter().any(|(k, _)| *k == kind)
    }

    pub fn is_running(&self) -> bool {
        self.frames.is_running()
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.frames.pending()
    }

    /// When the queued resize (if any) is due
    pub fn resize_deadline(&self) -> Option<Instant> {
        self.resize.deadline()
    }

    pub fn particles(&self) -> &[Particle] {
        self.field.particles()
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }
}

impl Drop for FieldView {
    fn drop(&mut self) {
        if self.mounted {
            log::warn!("Particle field dropped without unmount; host callbacks may leak");
        }
    }
}
