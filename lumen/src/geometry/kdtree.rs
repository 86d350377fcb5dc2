use crate::geometry::aabb::BoundingBox;
use crate::geometry::ray::Ray;
use crate::objects::{Primitive, Shape};
use crate::render::intersection::Intersection;

pub const MAX_LEAF_OBJECTS: usize = 4;
pub const MAX_TREE_DEPTH: usize = 20;

const MIN_EXTENT: f64 = 1e-9;

/// Node of the spatial partition. The tree is an arena: nodes own no
/// children and no primitives, only indices — child indices into the arena,
/// object indices into the scene's primitive list.
pub enum KdNode {
    Internal {
        bounds: BoundingBox,
        axis: u8,
        split: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        bounds: BoundingBox,
        objects: Vec<usize>,
    },
}

impl KdNode {

    fn bounds(&self) -> &BoundingBox {
        match self {
            KdNode::Internal { bounds, .. } => bounds,
            KdNode::Leaf { bounds, .. } => bounds,
        }
    }
}

/// KD-tree over the scene's primitives, answering nearest-intersection
/// queries in sub-linear expected time.
///
/// Straddle policy: a primitive whose box overlaps the split plane is
/// duplicated into both children, so no object is ever dropped and every
/// leaf holds all primitives overlapping its region. The nearest-hit fold
/// makes double-testing harmless.
pub struct KdTree {
    nodes: Vec<KdNode>,
    root: Option<usize>,
}

impl KdTree {

    pub fn build(objects: &[Primitive]) -> Self {
        let mut entries = Vec::with_capacity(objects.len());
        for (index, object) in objects.iter().enumerate() {
            let bounds = *object.bounds();
            if !bounds.is_finite() {
                warn!("skipping primitive {} with malformed bounds", index);
                continue;
            }
            entries.push((index, bounds));
        }

        let mut tree = KdTree {
            nodes: Vec::new(),
            root: None,
        };

        if entries.is_empty() {
            return tree;
        }

        let mut bounds = BoundingBox::empty();
        for (_, entry_bounds) in &entries {
            bounds.extend(entry_bounds);
        }

        let root = tree.build_node(entries, bounds, 0);
        tree.root = Some(root);
        tree
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn build_node(&mut self, entries: Vec<(usize, BoundingBox)>, bounds: BoundingBox, depth: usize) -> usize {
        if entries.len() <= MAX_LEAF_OBJECTS || depth >= MAX_TREE_DEPTH {
            return self.push_leaf(bounds, entries);
        }

        let axis = bounds.longest_axis();
        if bounds.extent(axis) < MIN_EXTENT {
            // zero-volume region, nothing left to subdivide
            return self.push_leaf(bounds, entries);
        }

        let split = median_centroid(&entries, axis);

        let mut left_entries = Vec::new();
        let mut right_entries = Vec::new();
        for (index, entry_bounds) in &entries {
            if entry_bounds.min.component(axis) < split {
                left_entries.push((*index, *entry_bounds));
            }
            if entry_bounds.max.component(axis) >= split {
                right_entries.push((*index, *entry_bounds));
            }
        }

        // clustered geometry can defeat the median; stop instead of
        // recursing on an unchanged set
        if left_entries.is_empty()
            || right_entries.is_empty()
            || left_entries.len() == entries.len()
            || right_entries.len() == entries.len()
        {
            return self.push_leaf(bounds, entries);
        }

        let left_bounds = union_bounds(&left_entries);
        let right_bounds = union_bounds(&right_entries);
        let left = self.build_node(left_entries, left_bounds, depth + 1);
        let right = self.build_node(right_entries, right_bounds, depth + 1);

        self.nodes.push(KdNode::Internal {
            bounds,
            axis,
            split,
            left,
            right,
        });
        self.nodes.len() - 1
    }

    fn push_leaf(&mut self, bounds: BoundingBox, entries: Vec<(usize, BoundingBox)>) -> usize {
        self.nodes.push(KdNode::Leaf {
            bounds,
            objects: entries.into_iter().map(|(index, _)| index).collect(),
        });
        self.nodes.len() - 1
    }

    /// Nearest hit over the whole tree, or `None`. A ray that misses the
    /// root bounds returns without descending.
    pub fn intersect(&self, objects: &[Primitive], ray: &Ray) -> Option<(usize, Intersection)> {
        let root = match self.root {
            Some(root) => root,
            None => return None,
        };

        self.nodes[root].bounds().intersect(ray)?;

        let mut best: Option<(usize, Intersection)> = None;
        self.intersect_node(root, objects, ray, &mut best);
        best
    }

    fn intersect_node(
        &self,
        node: usize,
        objects: &[Primitive],
        ray: &Ray,
        best: &mut Option<(usize, Intersection)>,
    ) {
        match &self.nodes[node] {
            KdNode::Leaf { objects: members, .. } => {
                for &index in members {
                    if let Some(hit) = objects[index].intersect(ray) {
                        let closer = best
                            .as_ref()
                            .map_or(true, |(_, current)| hit.ray_distance() < current.ray_distance());
                        if closer {
                            *best = Some((index, hit));
                        }
                    }
                }
            },
            KdNode::Internal { left, right, .. } => {
                let left_entry = self.nodes[*left].bounds().intersect(ray).map(|(enter, _)| enter);
                let right_entry = self.nodes[*right].bounds().intersect(ray).map(|(enter, _)| enter);

                let mut children = [(*left, left_entry), (*right, right_entry)];
                if entry_distance(&children[1]) < entry_distance(&children[0]) {
                    children.swap(0, 1);
                }

                for (child, entry) in &children {
                    let entry = match entry {
                        Some(entry) => *entry,
                        None => continue,
                    };

                    // the pruning that makes the tree pay off: skip a child
                    // whose region starts beyond the best hit found so far
                    if let Some((_, current)) = best {
                        if current.ray_distance() < entry {
                            continue;
                        }
                    }

                    self.intersect_node(*child, objects, ray, best);
                }
            },
        }
    }
}

fn entry_distance(child: &(usize, Option<f64>)) -> f64 {
    child.1.unwrap_or(f64::INFINITY)
}

fn median_centroid(entries: &[(usize, BoundingBox)], axis: u8) -> f64 {
    let mut centroids: Vec<f64> = entries
        .iter()
        .map(|(_, bounds)| bounds.centroid().component(axis))
        .collect();
    centroids.sort_by(|a, b| a.partial_cmp(b).expect("bounds are finite"));
    centroids[centroids.len() / 2]
}

fn union_bounds(entries: &[(usize, BoundingBox)]) -> BoundingBox {
    let mut bounds = BoundingBox::empty();
    for (_, entry_bounds) in entries {
        bounds.extend(entry_bounds);
    }
    bounds
}
