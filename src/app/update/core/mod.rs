mod reducer;
mod runtime;
mod shortcuts;

use crate::app::messages::Message;
use crate::app::state::{App, TICK_INTERVAL};
use crate::flip::FlipSurface;
use iced::{event, time, Subscription, Task};

impl App {
    pub(in crate::app) fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        let tasks: Vec<Task<Message>> = effects
            .into_iter()
            .map(|effect| self.run_effect(effect))
            .collect();
        Task::batch(tasks)
    }

    /// Runtime events always flow; the tick only runs while something
    /// time-based is in flight (a flip animation or a held press).
    pub(in crate::app) fn subscription(&self) -> Subscription<Message> {
        let events = event::listen_with(runtime::runtime_event_to_message);
        if self.pager.surface.is_flipping() || self.overlay.press_started_at.is_some() {
            Subscription::batch([events, time::every(TICK_INTERVAL).map(Message::Tick)])
        } else {
            events
        }
    }
}
