//! Terminal event forwarding.
//!
//! The reader owns the crossterm event subscription for the lifetime of the
//! UI loop: it stops as soon as the receiving side is dropped, so no input
//! handler outlives the screen it serves.

use std::time::Duration;

use crossterm::event::{self, Event};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Forward terminal events into the channel until it closes.
pub fn spawn_reader(tx: UnboundedSender<Event>) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || loop {
        match event::poll(POLL_INTERVAL) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!("terminal event read failed: {}", e);
                    break;
                }
            },
            Ok(false) => {
                if tx.is_closed() {
                    break;
                }
            }
            Err(e) => {
                tracing::warn!("terminal event poll failed: {}", e);
                break;
            }
        }
    })
}
