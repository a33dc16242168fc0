use std::fmt;
use std::rc::Rc;

use log::trace;

/// Handle returned by [`PointerListeners::attach`].
pub type ListenerId = u64;

/// Host capability for document-wide pointer-move / pointer-up listeners.
///
/// A drag keeps receiving events after the pointer leaves the control point,
/// so the host must route them while a registration is live.
pub trait PointerListeners {
    fn attach(&self) -> ListenerId;
    fn detach(&self, id: ListenerId);
}

/// Live listener registration. Dropping it detaches.
pub struct ListenerGuard {
    host: Rc<dyn PointerListeners>,
    id: ListenerId,
}

impl ListenerGuard {
    pub fn attach(host: Rc<dyn PointerListeners>) -> Self {
        let id = host.attach();
        trace!("gradient picker: drag listeners {id} attached");
        Self { host, id }
    }

    #[inline]
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        trace!("gradient picker: drag listeners {} detached", self.id);
        self.host.detach(self.id);
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ListenerGuard").field(&self.id).finish()
    }
}

/// State of one control-point drag gesture.
#[derive(Debug)]
pub struct ControlPointMoveState {
    pub initial_position: f32,
    pub index: usize,
    pub significant_move_happened: bool,
    listeners: Option<ListenerGuard>,
}

impl ControlPointMoveState {
    pub fn start(index: usize, initial_position: f32, host: Rc<dyn PointerListeners>) -> Self {
        Self {
            initial_position,
            index,
            significant_move_happened: false,
            listeners: Some(ListenerGuard::attach(host)),
        }
    }

    #[inline]
    pub fn listeners_activated(&self) -> bool {
        self.listeners.is_some()
    }

    /// Marks the gesture significant once it has strayed `threshold` from
    /// where it started. Never unmarks.
    pub fn track(&mut self, position: f32, threshold: f32) {
        if !self.significant_move_happened && (self.initial_position - position).abs() >= threshold {
            self.significant_move_happened = true;
        }
    }

    /// Detaches the listeners. Returns whether they were still attached.
    pub fn release(&mut self) -> bool {
        self.listeners.take().is_some()
    }
}
