use super::*;

/// Functionality relating to core `Path` operations, such as construction and segment access.
impl Path {
	/// Create a path from the given nodes. A path with fewer than two nodes has no segments;
	/// the `closed` flag is remembered either way.
	pub fn new(nodes: Vec<PathNode>, closed: bool) -> Self {
		Path {
			nodes,
			closed,
			reversed: false,
			cache: PathCache::default(),
		}
	}

	/// Create an open path from the given nodes.
	pub fn from_nodes(nodes: Vec<PathNode>) -> Self {
		Path::new(nodes, false)
	}

	/// Rebuild a path from its persistent form.
	pub fn from_data(data: PathData) -> Self {
		let mut path = Path::new(data.nodes.into_iter().map(PathNode::from_tuple).collect(), data.closed);
		path.reversed = data.reversed;
		path
	}

	/// Create a path from node tuples, open unless `closed` is set.
	pub fn from_node_tuples(tuples: Vec<NodeTuple>, closed: bool) -> Self {
		Path::new(tuples.into_iter().map(PathNode::from_tuple).collect(), closed)
	}

	/// The persistent form of this path. Selection state and caches are not carried.
	pub fn to_data(&self) -> PathData {
		PathData {
			nodes: self.to_node_tuples(),
			closed: self.closed,
			reversed: self.reversed,
		}
	}

	/// The persistent tuple form of each node, in storage order.
	pub fn to_node_tuples(&self) -> Vec<NodeTuple> {
		self.nodes.iter().map(PathNode::to_tuple).collect()
	}

	/// Returns true if the path has no nodes.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Returns the number of nodes in the path.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Returns the number of segments the path defines. Paths with fewer than two nodes have none;
	/// a closed path has one segment per node thanks to the wraparound segment.
	pub fn len_segments(&self) -> usize {
		match self.nodes.len() {
			0 | 1 => 0,
			len if self.closed => len,
			len => len - 1,
		}
	}

	/// The nodes of the path, in storage order.
	pub fn nodes(&self) -> &[PathNode] {
		&self.nodes
	}

	/// The node at `index`, if it exists.
	pub fn node(&self, index: usize) -> Option<&PathNode> {
		self.nodes.get(index)
	}

	pub fn first_node(&self) -> Option<&PathNode> {
		self.nodes.first()
	}

	pub fn last_node(&self) -> Option<&PathNode> {
		self.nodes.last()
	}

	pub fn closed(&self) -> bool {
		self.closed
	}

	/// Whether render-facing traversal runs the node list back to front. Storage order and
	/// segment indices are unaffected; see [`Path::iter`].
	pub fn reversed(&self) -> bool {
		self.reversed
	}

	/// The segment list in storage order, computed on first use and cached until the next mutation.
	/// Segment `i` connects node `i` to node `i + 1` (wrapping for the closing segment).
	pub fn segments(&self) -> &[Segment] {
		self.cache.segments.get_or_init(|| {
			let len = self.nodes.len();
			(0..self.len_segments()).map(|index| self.nodes[index].to_segment(&self.nodes[(index + 1) % len])).collect()
		})
	}

	/// The segment at `index`, if it exists.
	pub fn segment(&self, index: usize) -> Option<Segment> {
		self.segments().get(index).copied()
	}

	/// Iterate the directed segments of the path. When the path is reversed, segments are yielded
	/// back to front with each one's direction flipped.
	pub fn iter(&self) -> PathIter<'_> {
		PathIter { index: 0, path: self }
	}

	/// Drop all cached derived geometry. Every mutation funnels through here.
	pub(crate) fn invalidate(&mut self) {
		self.cache = PathCache::default();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use glam::DVec2;

	fn diamond(closed: bool) -> Path {
		Path::new(
			vec![
				PathNode::new(DVec2::new(0., -10.)),
				PathNode::new(DVec2::new(10., 0.)),
				PathNode::new(DVec2::new(0., 10.)),
				PathNode::new(DVec2::new(-10., 0.)),
			],
			closed,
		)
	}

	#[test]
	fn test_len_segments() {
		assert_eq!(Path::from_nodes(vec![]).len_segments(), 0);
		assert_eq!(Path::from_nodes(vec![PathNode::new(DVec2::ZERO)]).len_segments(), 0);
		assert_eq!(Path::new(vec![PathNode::new(DVec2::ZERO)], true).len_segments(), 0);
		assert_eq!(diamond(false).len_segments(), 3);
		assert_eq!(diamond(true).len_segments(), 4);
	}

	#[test]
	fn test_segments_connect_consecutive_nodes() {
		let path = diamond(true);
		let segments = path.segments();
		assert_eq!(segments.len(), 4);
		for (index, segment) in segments.iter().enumerate() {
			assert_eq!(segment.start, path.nodes()[index].anchor);
			assert_eq!(segment.end, path.nodes()[(index + 1) % 4].anchor);
		}
		// The wraparound segment closes the loop
		assert_eq!(segments[3].end, segments[0].start);
	}

	#[test]
	fn test_iter_honors_reversed() {
		let mut path = diamond(false);
		let forward: Vec<Segment> = path.iter().collect();
		path.set_reversed(true);
		let backward: Vec<Segment> = path.iter().collect();
		assert_eq!(forward.len(), backward.len());
		for (forward_segment, backward_segment) in forward.iter().zip(backward.iter().rev()) {
			assert_eq!(forward_segment.reverse(), *backward_segment);
		}
	}

	#[test]
	fn test_data_round_trip() {
		let mut path = diamond(true);
		path.set_node_selected(2, true);
		path.set_reversed(true);

		let rebuilt = Path::from_data(path.to_data());
		assert_eq!(rebuilt.len(), path.len());
		assert_eq!(rebuilt.closed(), path.closed());
		assert_eq!(rebuilt.reversed(), path.reversed());
		// Geometry survives, selection does not
		assert_eq!(rebuilt.to_node_tuples(), path.to_node_tuples());
		assert!(!rebuilt.nodes()[2].selected);

		// The round trip is idempotent
		assert_eq!(Path::from_data(rebuilt.to_data()), rebuilt);
	}
}
