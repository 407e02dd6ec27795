use async_channel::{Receiver, Sender};

use crate::{api::MapSurface, entities::Coordinates, entities::MapCommand};

/// Commands kept for a page that has not polled yet; later ones are dropped.
pub const QUEUE_CAPACITY: usize = 64;

/// Map commands waiting for the browser page to pick them up.
#[derive(Clone)]
pub struct CommandQueue {
    sender: Sender<MapCommand>,
    receiver: Receiver<MapCommand>,
}

impl CommandQueue {
    pub fn new() -> Self {
        let (sender, receiver) = async_channel::bounded(QUEUE_CAPACITY);
        Self { sender, receiver }
    }

    pub fn surface(&self) -> ChannelSurface {
        ChannelSurface {
            sender: self.sender.clone(),
        }
    }

    pub fn drain(&self) -> Vec<MapCommand> {
        let mut commands = vec![];

        while let Ok(command) = self.receiver.try_recv() {
            commands.push(command);
        }

        commands
    }
}

/// A `MapSurface` whose commands are queued for the page that draws the map.
pub struct ChannelSurface {
    sender: Sender<MapCommand>,
}

impl ChannelSurface {
    fn send(&self, command: MapCommand) {
        if let Err(err) = self.sender.try_send(command) {
            tracing::warn!("dropping map command: {}", err);
        }
    }
}

impl MapSurface for ChannelSurface {
    fn pan_to(&self, center: Coordinates) {
        self.send(MapCommand::PanTo { center });
    }

    fn place_marker(&self, position: Coordinates) {
        self.send(MapCommand::PlaceMarker { position });
    }
}

#[test]
fn drains_in_order() {
    let queue = CommandQueue::new();
    let surface = queue.surface();

    surface.place_marker(Coordinates::new(1.0, 1.0));
    surface.pan_to(Coordinates::new(2.0, 2.0));

    assert_eq!(
        queue.drain(),
        vec![
            MapCommand::PlaceMarker {
                position: Coordinates::new(1.0, 1.0)
            },
            MapCommand::PanTo {
                center: Coordinates::new(2.0, 2.0)
            },
        ]
    );
    assert!(queue.drain().is_empty());
}

#[test]
fn full_queue_drops_newest() {
    let queue = CommandQueue::new();
    let surface = queue.surface();

    for i in 0..QUEUE_CAPACITY + 10 {
        surface.pan_to(Coordinates::new(i as f64 / 100.0, 0.0));
    }

    let commands = queue.drain();
    assert_eq!(commands.len(), QUEUE_CAPACITY);
    assert_eq!(
        commands[0],
        MapCommand::PanTo {
            center: Coordinates::new(0.0, 0.0)
        }
    );
}
