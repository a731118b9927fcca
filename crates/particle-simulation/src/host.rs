//! Seam between the field and whatever hosts it (a window, a test harness)

/// Events the field subscribes to while mounted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    Resize,
    PointerMove,
    PointerLeave,
}

impl ListenerKind {
    pub const ALL: [ListenerKind; 3] = [
        ListenerKind::Resize,
        ListenerKind::PointerMove,
        ListenerKind::PointerLeave,
    ];
}

/// Identifies one scheduled animation-frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Identifies one attached event listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Scheduling and event-subscription primitives provided by the host
pub trait Host {
    /// Schedule a callback for the next display refresh
    fn request_frame(&mut self) -> FrameHandle;

    /// Drop a scheduled frame. Unknown handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);

    fn attach_listener(&mut self, kind: ListenerKind) -> ListenerId;

    /// Unknown ids are ignored.
    fn detach_listener(&mut self, id: ListenerId);
}
