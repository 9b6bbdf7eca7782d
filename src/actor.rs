//! Actors communicate over unbounded channels. Every message carries the
//! span it was sent from so the receiver can log inside the sender's context.

use tokio::sync::mpsc;
use tracing::Span;

pub mod broadcast;
pub mod switcher;

pub struct Sender<Event>(mpsc::UnboundedSender<(Span, Event)>);

pub type Receiver<Event> = mpsc::UnboundedReceiver<(Span, Event)>;

impl<Event> Clone for Sender<Event> {
    fn clone(&self) -> Self { Sender(self.0.clone()) }
}

impl<Event> std::fmt::Debug for Sender<Event> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sender").field("closed", &self.0.is_closed()).finish()
    }
}

impl<Event> Sender<Event> {
    /// Sends an event, dropping it if the receiver has gone away.
    pub fn send(&self, event: Event) { _ = self.try_send(event); }

    pub fn try_send(&self, event: Event) -> Result<(), mpsc::error::SendError<(Span, Event)>> {
        self.0.send((Span::current(), event))
    }
}

pub fn channel<Event>() -> (Sender<Event>, Receiver<Event>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Sender(tx), rx)
}
