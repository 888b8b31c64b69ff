use crate::payload::ItemId;

/// The two independent selections of the map.
///
/// `hovered` follows the pointer, `playing` follows playback. Changing one
/// never touches the other; a node may be hovered and playing at once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    hovered: Option<ItemId>,
    playing: Option<ItemId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last writer wins.
    pub fn set_hovered(&mut self, id: Option<ItemId>) {
        self.hovered = id;
    }

    /// Raw setter. Toggle semantics ("same id means stop") belong to the
    /// playback controller, which is the only caller outside tests.
    pub fn set_playing(&mut self, id: Option<ItemId>) {
        self.playing = id;
    }

    pub fn hovered(&self) -> Option<&ItemId> {
        self.hovered.as_ref()
    }

    pub fn playing(&self) -> Option<&ItemId> {
        self.playing.as_ref()
    }

    pub fn is_hovered(&self, id: &ItemId) -> bool {
        self.hovered.as_ref() == Some(id)
    }

    pub fn is_playing(&self, id: &ItemId) -> bool {
        self.playing.as_ref() == Some(id)
    }

    pub fn clear(&mut self) {
        self.hovered = None;
        self.playing = None;
    }
}
