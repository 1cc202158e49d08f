mod core;
mod manipulators;
mod solvers;
mod transform;

pub(crate) use manipulators::checked_view_scale;

use crate::node::{NodeTuple, PathNode};
use crate::Segment;

use glam::DVec2;
use std::cell::OnceCell;
use std::fmt::{Debug, Formatter, Result};

/// An editable path: an ordered list of nodes whose consecutive pairs define cubic segments,
/// optionally closed by a wraparound segment from the last node back to the first.
///
/// Derived geometry (the segment list and the tight bounding box) is computed lazily and cached.
/// Every mutator funnels through a single `invalidate` call, so the cache can never go stale.
/// The cache makes `Path` single-threaded by construction; clone a snapshot for worker threads.
#[derive(Clone)]
pub struct Path {
	nodes: Vec<PathNode>,
	closed: bool,
	reversed: bool,
	cache: PathCache,
}

#[derive(Clone, Default)]
struct PathCache {
	segments: OnceCell<Vec<Segment>>,
	bounding_box: OnceCell<Option<[DVec2; 2]>>,
}

/// The persistent representation of a path: node tuples plus the two direction flags.
/// This is the only shape the serialization layer consumes; caches and selection state never leave the process.
#[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
pub struct PathData {
	pub nodes: Vec<NodeTuple>,
	pub closed: bool,
	pub reversed: bool,
}

/// Iteration structure for the directed segments of a `Path`, honoring the `reversed` render flag.
pub struct PathIter<'a> {
	index: usize,
	path: &'a Path,
}

impl Iterator for PathIter<'_> {
	type Item = Segment;

	fn next(&mut self) -> Option<Self::Item> {
		if self.index >= self.path.len_segments() {
			return None;
		}
		let index = self.index;
		self.index += 1;

		if self.path.reversed() {
			Some(self.path.segments()[self.path.len_segments() - 1 - index].reverse())
		} else {
			Some(self.path.segments()[index])
		}
	}
}

impl PartialEq for Path {
	fn eq(&self, other: &Self) -> bool {
		self.nodes == other.nodes && self.closed == other.closed && self.reversed == other.reversed
	}
}

impl Debug for Path {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result {
		f.debug_struct("Path").field("closed", &self.closed).field("reversed", &self.reversed).field("nodes", &self.nodes).finish()
	}
}
