//! Tailoring: turning parsed rules into collation weights.
//!
//! The builder keeps one ordered list of nodes. Each node records the level at
//! which it differs from its predecessor, so weights fall out of a single walk
//! over the list. Reset targets that no rule has placed yet become root
//! anchors, kept between `[first regular]` and `[last regular]` in root order.
//! An untailored character sorts after the closest preceding anchor and the
//! relations hung off it, ahead of relations placed `[before n]` the next
//! anchor.

use std::collections::HashMap;

use crate::root::root_key;
use crate::rules::{Boundary, Reset, Rule, Strength};

/// Weights of one collation element. A zero primary is primary-ignorable.
///
/// The second half of the primary is only non-zero for untailored characters,
/// which carry their root key there to stay distinct inside a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub(crate) struct Weights {
    pub primary: (u32, u32),
    pub secondary: u32,
    pub tertiary: u32,
}

impl Weights {
    pub fn is_primary_ignorable(&self) -> bool {
        self.primary == (0, 0)
    }
}

/// Untailored characters between one root anchor and the next.
#[derive(Debug)]
struct Region {
    key: u32,
    anchor: String,
    /// Primary the region's characters share, ahead of their root key.
    gap: u32,
}

#[derive(Debug)]
pub(crate) struct Tailoring {
    weights: HashMap<String, Weights>,
    /// In root order.
    regions: Vec<Region>,
    /// Gap between `[first regular]` and the first anchor.
    default_gap: u32,
    /// Longest tailored string, in characters.
    longest: usize,
}

impl Tailoring {
    pub fn build(rules: &[Rule]) -> Self {
        let mut builder = Builder::new();
        for rule in rules {
            match rule {
                Rule::Reset(reset) => builder.reset(reset),
                Rule::Relation { strength, text } => builder.relate(*strength, text),
            }
        }
        builder.finish()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Collation elements of `text`, matching the longest tailored string at
    /// each position.
    pub fn elements(&self, text: &str) -> Vec<Weights> {
        let chars: Vec<char> = text.chars().collect();
        let mut elements = Vec::with_capacity(chars.len());

        let mut i = 0;
        while i < chars.len() {
            let max = self.longest.min(chars.len() - i);
            let matched = (1..=max).rev().find_map(|len| {
                let candidate: String = chars[i..i + len].iter().collect();
                self.weights.get(&candidate).map(|w| (len, *w))
            });

            match matched {
                Some((len, weights)) => {
                    elements.push(weights);
                    i += len;
                }
                None => {
                    elements.extend(self.root_weights(chars[i]));
                    i += 1;
                }
            }
        }

        elements
    }

    fn root_weights(&self, c: char) -> Option<Weights> {
        if is_completely_ignorable(c) {
            return None;
        }

        let mut buf = [0u8; 4];
        let text: &str = c.encode_utf8(&mut buf);
        let key = root_key(text);
        let region = self
            .regions
            .partition_point(|r| (r.key, r.anchor.as_str()) < (key, text));
        let gap = match region {
            0 => self.default_gap,
            n => self.regions[n - 1].gap,
        };

        Some(Weights {
            primary: (gap, key),
            secondary: 0,
            tertiary: 0,
        })
    }
}

/// Variation selectors and joiners carry no weight in the root order.
fn is_completely_ignorable(c: char) -> bool {
    matches!(c, '\u{FE00}'..='\u{FE0F}' | '\u{200C}' | '\u{200D}')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Boundary(Boundary),
    Root,
    Tailored,
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    text: String,
    strength: Strength,
    /// Placed ahead of the following anchor rather than after the preceding one.
    leading: bool,
}

impl Node {
    fn boundary(boundary: Boundary, strength: Strength) -> Self {
        Self {
            kind: NodeKind::Boundary(boundary),
            text: String::new(),
            strength,
            leading: false,
        }
    }
}

struct Builder {
    nodes: Vec<Node>,
    cursor: usize,
    before: Option<Strength>,
    /// Whether relations from the current reset are leading nodes.
    leading: bool,
}

impl Builder {
    fn new() -> Self {
        let nodes = vec![
            Node::boundary(Boundary::FirstPrimaryIgnorable, Strength::Primary),
            Node::boundary(Boundary::LastPrimaryIgnorable, Strength::Secondary),
            Node::boundary(Boundary::FirstVariable, Strength::Primary),
            Node::boundary(Boundary::LastVariable, Strength::Primary),
            Node::boundary(Boundary::FirstRegular, Strength::Primary),
            Node::boundary(Boundary::LastRegular, Strength::Primary),
        ];
        Self {
            nodes,
            cursor: 0,
            before: None,
            leading: false,
        }
    }

    fn position_of(&self, text: &str) -> Option<usize> {
        self.nodes
            .iter()
            .position(|n| !matches!(n.kind, NodeKind::Boundary(_)) && n.text == text)
    }

    fn boundary_index(&self, boundary: Boundary) -> usize {
        self.nodes
            .iter()
            .position(|n| n.kind == NodeKind::Boundary(boundary))
            .expect("boundary nodes are never removed")
    }

    /// Index of `text`, inserting it as a root anchor when no rule placed it.
    fn anchor(&mut self, text: &str) -> usize {
        if let Some(index) = self.position_of(text) {
            return index;
        }

        let position = (root_key(text), text);
        let first = self.boundary_index(Boundary::FirstRegular);
        let last = self.boundary_index(Boundary::LastRegular);
        let at = (first + 1..last)
            .find(|&i| {
                let node = &self.nodes[i];
                node.kind == NodeKind::Root && (root_key(&node.text), node.text.as_str()) > position
            })
            .unwrap_or(last);

        self.nodes.insert(
            at,
            Node {
                kind: NodeKind::Root,
                text: text.to_string(),
                strength: Strength::Primary,
                leading: false,
            },
        );
        at
    }

    fn reset(&mut self, reset: &Reset) {
        self.before = None;
        self.cursor = match reset {
            Reset::Text(text) => self.anchor(text),
            Reset::Boundary(boundary) => self.boundary_index(*boundary),
            Reset::Before(level, text) => {
                self.before = Some(*level);
                self.anchor(text)
            }
        };

        let target = &self.nodes[self.cursor];
        self.leading = match target.kind {
            NodeKind::Tailored => target.leading,
            NodeKind::Root => self.before.is_some(),
            NodeKind::Boundary(_) => false,
        };
    }

    fn relate(&mut self, strength: Strength, text: &str) {
        if let Some(existing) = self.position_of(text) {
            if existing == self.cursor {
                self.before = None;
                return;
            }
            self.remove(existing);
        }

        let leading = self.leading;
        let node = |strength| Node {
            kind: NodeKind::Tailored,
            text: text.to_string(),
            strength,
            leading,
        };

        self.cursor = match self.before.take() {
            Some(level) => {
                // Step back to the start of the cursor's group at `level`;
                // the new node takes over that group's difference.
                let mut at = self.cursor;
                while at > 0 && self.nodes[at].strength > level {
                    at -= 1;
                }
                let inherited = self.nodes[at].strength;
                self.nodes[at].strength = level;
                self.nodes.insert(at, node(inherited));
                at
            }
            None => {
                // Skip past weaker followers of the cursor.
                let mut at = self.cursor + 1;
                while at < self.nodes.len() && self.nodes[at].strength > strength {
                    at += 1;
                }
                self.nodes.insert(at, node(strength));
                at
            }
        };
    }

    fn remove(&mut self, index: usize) {
        let removed = self.nodes.remove(index);
        if let Some(next) = self.nodes.get_mut(index) {
            next.strength = next.strength.min(removed.strength);
        }
        if index < self.cursor {
            self.cursor -= 1;
        }
    }

    fn finish(self) -> Tailoring {
        let mut weights = HashMap::new();
        let mut regions = Vec::new();
        let mut default_gap = 0;
        let mut longest = 0;

        let mut current = Weights::default();
        let mut in_regular = false;
        let mut open_anchor: Option<String> = None;
        let mut gap = 0;

        for (i, node) in self.nodes.into_iter().enumerate() {
            if i > 0 {
                match node.strength {
                    Strength::Primary => {
                        current = Weights {
                            primary: (current.primary.0 + 1, 0),
                            ..Weights::default()
                        };
                    }
                    Strength::Secondary => {
                        current.secondary += 1;
                        current.tertiary = 0;
                    }
                    Strength::Tertiary => current.tertiary += 1,
                    Strength::Identical => {}
                }
            }

            let closes_region = matches!(
                node.kind,
                NodeKind::Root | NodeKind::Boundary(Boundary::LastRegular)
            );
            if in_regular && closes_region {
                match open_anchor.take() {
                    Some(anchor) => regions.push(Region {
                        key: root_key(&anchor),
                        anchor,
                        gap,
                    }),
                    None => default_gap = gap,
                }
            }

            match node.kind {
                NodeKind::Boundary(Boundary::FirstRegular) => {
                    in_regular = true;
                    gap = current.primary.0;
                }
                NodeKind::Boundary(Boundary::LastRegular) => in_regular = false,
                NodeKind::Boundary(_) => {}
                NodeKind::Root | NodeKind::Tailored => {
                    if in_regular && (node.kind == NodeKind::Root || !node.leading) {
                        gap = current.primary.0;
                    }
                    if node.kind == NodeKind::Root && in_regular {
                        open_anchor = Some(node.text.clone());
                    }
                    longest = longest.max(node.text.chars().count());
                    weights.insert(node.text, current);
                }
            }
        }

        Tailoring {
            weights,
            regions,
            default_gap,
            longest,
        }
    }
}
