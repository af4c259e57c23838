//! The input events gathered over one frame, in the form the state machine
//! consumes them
use crate::command::Command;
use crate::game::geometry::{Point, Region};
use enum_map::EnumMap;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct FrameInput {
    /// Commands whose key went down this frame
    pressed: EnumMap<Command, bool>,

    /// Commands whose key is down this frame
    held: EnumMap<Command, bool>,

    /// Last known pointer position, in screen pixels
    pointer: Option<Point>,

    /// Whether the primary pointer button was released this frame
    clicked: bool,
}

impl FrameInput {
    /// Record a key press.  A pressed key also counts as held for the rest
    /// of the frame.
    pub(crate) fn press(&mut self, cmd: Command) {
        self.pressed[cmd] = true;
        self.held[cmd] = true;
    }

    /// Record a key that is still down from an earlier frame
    pub(crate) fn hold(&mut self, cmd: Command) {
        self.held[cmd] = true;
    }

    pub(crate) fn move_pointer(&mut self, p: Option<Point>) {
        self.pointer = p;
    }

    /// Record a release of the primary pointer button at `p`
    pub(crate) fn click(&mut self, p: Option<Point>) {
        self.pointer = p;
        self.clicked = p.is_some();
    }

    pub(crate) fn pressed(&self, cmd: Command) -> bool {
        self.pressed[cmd]
    }

    pub(crate) fn held(&self, cmd: Command) -> bool {
        self.held[cmd]
    }

    pub(crate) fn hovering(&self, region: Region) -> bool {
        self.pointer.is_some_and(|p| region.contains(p))
    }

    pub(crate) fn clicked(&self, region: Region) -> bool {
        self.clicked && self.hovering(region)
    }

    /// Forget this frame's key and click events, keeping the pointer
    /// position
    pub(crate) fn next_frame(&mut self) {
        self.pressed = EnumMap::default();
        self.held = EnumMap::default();
        self.clicked = false;
    }
}
