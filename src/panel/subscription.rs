use super::PanelState;

/// Handle returned by [`super::PanelStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// One field watcher: re-runs its selector after every transition and fires
/// the callback only when the projected value changed.
pub(super) struct Subscriber {
    pub(super) id: SubscriptionId,
    watch: Box<dyn FnMut(&PanelState)>,
}

impl Subscriber {
    pub(super) fn new<T, S, F>(id: u64, current: &PanelState, selector: S, mut callback: F) -> Self
    where
        T: PartialEq + 'static,
        S: Fn(&PanelState) -> T + 'static,
        F: FnMut(&T) + 'static,
    {
        let mut last = selector(current);
        let watch = move |state: &PanelState| {
            let next = selector(state);
            if next != last {
                callback(&next);
                last = next;
            }
        };
        Self {
            id: SubscriptionId(id),
            watch: Box::new(watch),
        }
    }

    pub(super) fn notify(&mut self, state: &PanelState) {
        (self.watch)(state);
    }
}
