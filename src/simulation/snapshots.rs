use std::ops::Index;
use crate::error::{IsingError, Result};
use crate::lattice::Lattice;

/// Ordered, append-only record of full lattice states, one per frame.
///
/// Frame 0 is the lattice before any trial ran; frame `k` is the lattice
/// after `k * steps_per_frame` trials. Once sealed no further frame can be
/// written.
#[derive(Debug, Clone)]
pub struct SnapshotSequence {
    frames: Vec<Lattice>,
    frame_count: usize,
    steps_per_frame: usize,
    sealed: bool,
}

impl SnapshotSequence {
    pub fn with_capacity(frame_count: usize, steps_per_frame: usize) -> Self {
        Self {
            frames: Vec::with_capacity(frame_count),
            frame_count,
            steps_per_frame,
            sealed: false,
        }
    }

    pub(crate) fn record(&mut self, lattice: &Lattice) -> Result<()> {
        if self.sealed || self.frames.len() == self.frame_count {
            return Err(IsingError::SnapshotSealed);
        }
        self.frames.push(lattice.clone());
        Ok(())
    }

    pub(crate) fn seal(&mut self) {
        self.sealed = true;
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Number of frames the sequence was allocated for.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn steps_per_frame(&self) -> usize {
        self.steps_per_frame
    }

    pub fn get(&self, index: usize) -> Option<&Lattice> {
        self.frames.get(index)
    }

    pub fn first(&self) -> Option<&Lattice> {
        self.frames.first()
    }

    pub fn last(&self) -> Option<&Lattice> {
        self.frames.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Lattice> {
        self.frames.iter()
    }

    pub fn as_slice(&self) -> &[Lattice] {
        &self.frames
    }
}

impl Index<usize> for SnapshotSequence {
    type Output = Lattice;

    fn index(&self, index: usize) -> &Lattice {
        &self.frames[index]
    }
}

impl<'a> IntoIterator for &'a SnapshotSequence {
    type Item = &'a Lattice;
    type IntoIter = std::slice::Iter<'a, Lattice>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_up_to_capacity() {
        let lattice = Lattice::cold(2).unwrap();
        let mut frames = SnapshotSequence::with_capacity(2, 5);
        assert!(frames.is_empty());
        frames.record(&lattice).unwrap();
        frames.record(&lattice).unwrap();
        assert_eq!(frames.len(), 2);
        assert!(matches!(frames.record(&lattice), Err(IsingError::SnapshotSealed)));
    }

    #[test]
    fn test_sealed_sequence_rejects_writes() {
        let lattice = Lattice::cold(2).unwrap();
        let mut frames = SnapshotSequence::with_capacity(3, 1);
        frames.record(&lattice).unwrap();
        frames.seal();
        assert!(frames.is_sealed());
        assert!(matches!(frames.record(&lattice), Err(IsingError::SnapshotSealed)));
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0], lattice);
    }

    #[test]
    fn test_frames_are_copies() {
        let mut lattice = Lattice::cold(2).unwrap();
        let mut frames = SnapshotSequence::with_capacity(2, 1);
        frames.record(&lattice).unwrap();
        lattice.flip(0, 0);
        frames.record(&lattice).unwrap();
        assert_eq!(frames[0].get(0, 0), -1);
        assert_eq!(frames[1].get(0, 0), 1);
    }
}
