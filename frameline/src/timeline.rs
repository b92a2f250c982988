//! Keyed timeline tracks and change events
//!
//! The editing engine treats keyframe storage as an opaque keyed map: it
//! never interprets key payloads, it only enumerates which keys exist so
//! that dependent observers can be told a value under them changed.

use std::collections::BTreeSet;

use crate::node::NodeId;

/// Frame position of a key on the timeline
pub type FrameIndex = i32;

/// The key tracks a node's timeline can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackType {
    /// Translation/rotation/scale keys
    Transform,
    /// Image source keys
    Image,
}

/// Per-node keyed track storage
///
/// Keys are ordered by frame; iteration order is deterministic, which keeps
/// change-event target lists stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeLine {
    transform_keys: BTreeSet<FrameIndex>,
    image_keys: BTreeSet<FrameIndex>,
}

impl TimeLine {
    /// Create an empty timeline
    pub fn new() -> Self {
        Self::default()
    }

    fn track(&self, track: TrackType) -> &BTreeSet<FrameIndex> {
        match track {
            TrackType::Transform => &self.transform_keys,
            TrackType::Image => &self.image_keys,
        }
    }

    fn track_mut(&mut self, track: TrackType) -> &mut BTreeSet<FrameIndex> {
        match track {
            TrackType::Transform => &mut self.transform_keys,
            TrackType::Image => &mut self.image_keys,
        }
    }

    /// Insert a key at `frame`; returns false if one already existed
    pub fn add_key(&mut self, track: TrackType, frame: FrameIndex) -> bool {
        self.track_mut(track).insert(frame)
    }

    /// Remove the key at `frame`; returns false if none existed
    pub fn remove_key(&mut self, track: TrackType, frame: FrameIndex) -> bool {
        self.track_mut(track).remove(&frame)
    }

    /// Whether a key exists at `frame`
    pub fn has_key(&self, track: TrackType, frame: FrameIndex) -> bool {
        self.track(track).contains(&frame)
    }

    /// Iterate the key frames of a track in ascending order
    pub fn keys(&self, track: TrackType) -> impl Iterator<Item = FrameIndex> + '_ {
        self.track(track).iter().copied()
    }

    /// Number of keys in a track
    pub fn key_count(&self, track: TrackType) -> usize {
        self.track(track).len()
    }
}

/// What happened to the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeLineEventKind {
    /// The value stored under existing keys changed
    ChangeKeyValue,
}

/// One (entity, track, key) triple that must be told about a change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventTarget {
    /// The node whose track is affected
    pub node: NodeId,
    /// The affected track
    pub track: TrackType,
    /// The affected key frame
    pub frame: FrameIndex,
}

/// A structured change descriptor dispatched to timeline observers
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeLineEvent {
    kind: TimeLineEventKind,
    targets: Vec<EventTarget>,
}

impl TimeLineEvent {
    /// Create an event with no targets yet
    pub fn new(kind: TimeLineEventKind) -> Self {
        Self {
            kind,
            targets: Vec::new(),
        }
    }

    /// Event kind
    pub fn kind(&self) -> TimeLineEventKind {
        self.kind
    }

    /// Append a notification target
    pub fn push_target(&mut self, node: NodeId, track: TrackType, frame: FrameIndex) {
        self.targets.push(EventTarget { node, track, frame });
    }

    /// The accumulated targets, in insertion order
    pub fn targets(&self) -> &[EventTarget] {
        &self.targets
    }

    /// Whether the event carries no targets
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_iterate_in_frame_order() {
        let mut timeline = TimeLine::new();
        timeline.add_key(TrackType::Transform, 16);
        timeline.add_key(TrackType::Transform, 0);
        timeline.add_key(TrackType::Transform, 8);
        assert!(!timeline.add_key(TrackType::Transform, 8));

        let frames: Vec<_> = timeline.keys(TrackType::Transform).collect();
        assert_eq!(frames, vec![0, 8, 16]);
        assert_eq!(timeline.key_count(TrackType::Image), 0);
    }

    #[test]
    fn test_tracks_are_independent() {
        let mut timeline = TimeLine::new();
        timeline.add_key(TrackType::Image, 4);
        assert!(timeline.has_key(TrackType::Image, 4));
        assert!(!timeline.has_key(TrackType::Transform, 4));
        assert!(timeline.remove_key(TrackType::Image, 4));
        assert!(!timeline.remove_key(TrackType::Image, 4));
    }

    #[test]
    fn test_event_accumulates_targets_in_order() {
        let mut event = TimeLineEvent::new(TimeLineEventKind::ChangeKeyValue);
        assert!(event.is_empty());

        let node = NodeId::from_raw(0);
        event.push_target(node, TrackType::Transform, 8);
        event.push_target(node, TrackType::Transform, 0);

        assert_eq!(event.kind(), TimeLineEventKind::ChangeKeyValue);
        assert_eq!(
            event.targets().iter().map(|t| t.frame).collect::<Vec<_>>(),
            vec![8, 0]
        );
    }
}
