//! Self-rescheduling animation loop with explicit start/stop

use crate::host::{FrameHandle, Host};

/// A running flag plus the handle of the one pending frame.
///
/// While running there is exactly one scheduled frame; after `stop` there
/// is none, and frames scheduled before the stop are rejected.
#[derive(Debug, Default)]
pub struct FrameLoop {
    running: bool,
    pending: Option<FrameHandle>,
}

impl FrameLoop {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn start<H: Host + ?Sized>(&mut self, host: &mut H) {
        if self.running {
            return;
        }
        self.running = true;
        self.pending = Some(host.request_frame());
    }

    /// Accept a fired frame and arm the next one.
    ///
    /// Returns false, without scheduling anything, for frames that do not
    /// belong to the running loop.
    pub fn on_frame<H: Host + ?Sized>(&mut self, handle: FrameHandle, host: &mut H) -> bool {
        if !self.running || self.pending != Some(handle) {
            return false;
        }
        self.pending = Some(host.request_frame());
        true
    }

    pub fn stop<H: Host + ?Sized>(&mut self, host: &mut H) {
        if let Some(handle) = self.pending.take() {
            host.cancel_frame(handle);
        }
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::RecordingHost;

    #[test]
    fn test_start_arms_one_frame() {
        let mut host = RecordingHost::default();
        let mut frames = FrameLoop::default();
        frames.start(&mut host);
        frames.start(&mut host);
        assert!(frames.is_running());
        assert_eq!(host.frames.len(), 1);
    }

    #[test]
    fn test_each_frame_rearms() {
        let mut host = RecordingHost::default();
        let mut frames = FrameLoop::default();
        frames.start(&mut host);

        for _ in 0..5 {
            let handle = host.fire_frame().unwrap();
            assert!(frames.on_frame(handle, &mut host));
            assert_eq!(host.frames.len(), 1);
        }
    }

    #[test]
    fn test_stop_cancels_pending_frame() {
        let mut host = RecordingHost::default();
        let mut frames = FrameLoop::default();
        frames.start(&mut host);
        frames.stop(&mut host);
        assert!(!frames.is_running());
        assert!(host.frames.is_empty());
        assert_eq!(frames.pending(), None);
    }

    #[test]
    fn test_stale_frame_is_rejected() {
        let mut host = RecordingHost::default();
        let mut frames = FrameLoop::default();
        frames.start(&mut host);
        let stale = host.fire_frame().unwrap();
        frames.stop(&mut host);

        assert!(!frames.on_frame(stale, &mut host));
        assert!(host.frames.is_empty());
    }
}
