//! winit-backed [`Host`]: frame requests become redraw requests, listeners
//! become a routing table consulted before window events reach the field.

use particle_simulation::{FrameHandle, Host, ListenerId, ListenerKind};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use winit::window::Window;

pub struct WinitHost {
    window: Arc<Window>,
    next_id: u64,
    frames: VecDeque<FrameHandle>,
    listeners: HashMap<ListenerId, ListenerKind>,
}

impl WinitHost {
    pub fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            next_id: 0,
            frames: VecDeque::new(),
            listeners: HashMap::new(),
        }
    }

    /// Pop the oldest scheduled frame when the window is ready to redraw
    pub fn take_frame(&mut self) -> Option<FrameHandle> {
        let handle = self.frames.pop_front();
        // winit coalesces redraw requests, so re-arm for anything left over.
        if !self.frames.is_empty() {
            self.window.request_redraw();
        }
        handle
    }

    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.listeners.values().any(|k| *k == kind)
    }

    pub fn scheduled_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl Host for WinitHost {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id());
        self.frames.push_back(handle);
        self.window.request_redraw();
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.frames.retain(|h| *h != handle);
    }

    fn attach_listener(&mut self, kind: ListenerKind) -> ListenerId {
        let id = ListenerId(self.next_id());
        self.listeners.insert(id, kind);
        log::debug!("attached {:?} listener {:?}", kind, id);
        id
    }

    fn detach_listener(&mut self, id: ListenerId) {
        if let Some(kind) = self.listeners.remove(&id) {
            log::debug!("detached {:?} listener {:?}", kind, id);
        }
    }
}
