use std::sync::mpsc::{self, Receiver, Sender};

use serde::{Deserialize, Serialize};

use crate::item::{Item, ItemId, ItemPatch};

/// Events emitted by the inventory after each mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StoreEvent {
    Created(Box<Item>),
    Updated { id: ItemId, patch: ItemPatch },
    Deleted { id: ItemId, name: String },
    Imported { count: usize },
    Cleared,
}

/// Toast classification for the notification collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToastKind {
    ItemAdded,
    ItemUpdated,
    ItemDeleted,
    ItemsImported,
    DataCleared,
}

impl StoreEvent {
    /// Fire-and-forget toast payload for the presentation layer.
    pub fn toast(&self) -> (ToastKind, String) {
        match self {
            Self::Created(item) => (
                ToastKind::ItemAdded,
                format!("{} has been added to your items.", item.name),
            ),
            Self::Updated { .. } => (
                ToastKind::ItemUpdated,
                "The item has been updated successfully.".to_string(),
            ),
            Self::Deleted { name, .. } => {
                (ToastKind::ItemDeleted, format!("{} has been deleted.", name))
            }
            Self::Imported { count } => (
                ToastKind::ItemsImported,
                format!("Imported {} items.", count),
            ),
            Self::Cleared => (
                ToastKind::DataCleared,
                "All data has been cleared.".to_string(),
            ),
        }
    }
}

/// Commands from UI triggers to the single screen owning modal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiCommand {
    OpenAddItem,
    OpenItemDetail(ItemId),
    OpenSettings,
}

/// Typed command channel: any number of producers, exactly one consumer.
///
/// Replaces ambient broadcast events with explicit message passing; the
/// receiver goes to the screen that owns modal state.
pub struct CommandBus {
    tx: Sender<UiCommand>,
}

impl CommandBus {
    /// Create the bus and hand back the single consumer end.
    pub fn new() -> (Self, Receiver<UiCommand>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }

    /// Clone a sender handle for a UI trigger.
    pub fn sender(&self) -> Sender<UiCommand> {
        self.tx.clone()
    }

    /// Send a command, ignoring a disconnected consumer (app shutdown).
    pub fn send(&self, command: UiCommand) {
        let _ = self.tx.send(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Category;
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_item(name: &str) -> Item {
        Item {
            id: Uuid::new_v4(),
            name: name.into(),
            category: Category::Food,
            quantity: 1,
            expire_date: "2024-06-18".into(),
            purchase_date: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn event_serde_round_trip() {
        let events = vec![
            StoreEvent::Created(Box::new(sample_item("Milk"))),
            StoreEvent::Updated {
                id: Uuid::new_v4(),
                patch: ItemPatch {
                    quantity: Some(3),
                    ..Default::default()
                },
            },
            StoreEvent::Deleted {
                id: Uuid::new_v4(),
                name: "Milk".into(),
            },
            StoreEvent::Imported { count: 7 },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: StoreEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn toast_wording() {
        let (kind, message) = StoreEvent::Created(Box::new(sample_item("Milk"))).toast();
        assert_eq!(kind, ToastKind::ItemAdded);
        assert_eq!(message, "Milk has been added to your items.");

        let (kind, message) = StoreEvent::Deleted {
            id: Uuid::new_v4(),
            name: "Soap".into(),
        }
        .toast();
        assert_eq!(kind, ToastKind::ItemDeleted);
        assert_eq!(message, "Soap has been deleted.");
    }

    #[test]
    fn command_bus_delivers_to_single_consumer() {
        let (bus, rx) = CommandBus::new();
        let trigger = bus.sender();
        trigger.send(UiCommand::OpenAddItem).unwrap();
        bus.send(UiCommand::OpenSettings);
        assert_eq!(rx.recv().unwrap(), UiCommand::OpenAddItem);
        assert_eq!(rx.recv().unwrap(), UiCommand::OpenSettings);
    }

    #[test]
    fn command_bus_send_survives_dropped_consumer() {
        let (bus, rx) = CommandBus::new();
        drop(rx);
        bus.send(UiCommand::OpenAddItem);
    }
}
