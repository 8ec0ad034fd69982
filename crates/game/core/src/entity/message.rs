use crate::map::Position;

/// Category of a broadcast event.
///
/// Only routing is defined here; what an entity does with a message is up to
/// the entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MessageKind {
    Noise,
    Impact,
    Heat,
    Light,
    Custom(u16),
}

/// Event delivered through [`crate::Entity::receive_message`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    pub kind: MessageKind,
    /// Where the event originated, when it has a location.
    pub origin: Option<Position>,
    /// Kind-specific magnitude (volume, damage, temperature).
    pub magnitude: u32,
}

impl Message {
    pub const fn new(kind: MessageKind) -> Self {
        Self {
            kind,
            origin: None,
            magnitude: 0,
        }
    }

    #[must_use]
    pub const fn at(mut self, origin: Position) -> Self {
        self.origin = Some(origin);
        self
    }

    #[must_use]
    pub const fn with_magnitude(mut self, magnitude: u32) -> Self {
        self.magnitude = magnitude;
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn message_with_origin_survives_json() {
        let message = Message::new(MessageKind::Custom(7))
            .at(Position::new(3, 4))
            .with_magnitude(12);

        let text = serde_json::to_string(&message).unwrap();
        let back: Message = serde_json::from_str(&text).unwrap();
        assert_eq!(back, message);
    }
}
