use gsl_core::month_key::MonthKey;
use gsl_core::observation::Observation;
use gsl_core::region::Region;
use std::collections::BTreeMap;

/// One month's observations across the three geographic partitions.
///
/// A frame is only built once all three partitions have resolved; a
/// partition that failed to load contributes an empty region.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub mexico: Vec<Observation>,
    pub utah: Vec<Observation>,
    pub arizona: Vec<Observation>,
}

impl Frame {
    pub fn region_mut(&mut self, region: Region) -> &mut Vec<Observation> {
        match region {
            Region::Mexico => &mut self.mexico,
            Region::Utah => &mut self.utah,
            Region::Arizona => &mut self.arizona,
        }
    }

    /// All observations of the frame, Mexico first, then Utah, then Arizona.
    pub fn all(&self) -> impl Iterator<Item = &Observation> {
        self.mexico
            .iter()
            .chain(self.utah.iter())
            .chain(self.arizona.iter())
    }

    pub fn len(&self) -> usize {
        self.mexico.len() + self.utah.len() + self.arizona.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Month-keyed frame lookup. A key with no data renders as an empty frame,
/// never an error.
#[derive(Debug, Default)]
pub struct FrameStore {
    frames: BTreeMap<MonthKey, Frame>,
    empty: Frame,
}

impl FrameStore {
    pub fn new() -> FrameStore {
        FrameStore::default()
    }

    pub fn insert(&mut self, key: MonthKey, frame: Frame) {
        self.frames.insert(key, frame);
    }

    pub fn frame(&self, key: &MonthKey) -> &Frame {
        self.frames.get(key).unwrap_or(&self.empty)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Rendering collaborator for replay frames and manual jumps.
///
/// Implementations draw the frame however they like (canvas bridge, log
/// lines, test capture); the sequencer only promises one call per tick and
/// controls disabled for the duration of a run.
pub trait FrameSink {
    fn render(&mut self, key: MonthKey, frame: &Frame);

    /// Mirror of the slider disable/enable around a run.
    fn set_controls_enabled(&mut self, _enabled: bool) {}
}
