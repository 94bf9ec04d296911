use crate::error;

/// A node in a [`LinkedList`].
///
/// `next` is the index of the following node in the list's storage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub body: f64,
    pub next: Option<usize>,
}

/// A singly linked chain of floats that tracks its minimum and maximum.
///
/// All nodes live in one vector owned by the list and link to each other
/// by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkedList {
    nodes: Vec<Node>,
    bounds: Option<(f64, f64)>,
}

impl LinkedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_slice(source: &[f64]) -> Self {
        let mut list = LinkedList::new();
        list.fill(source);
        list
    }

    /// Append every value in `source`, linking each node to the next, and
    /// update minimum and maximum in the same pass.
    pub fn fill(&mut self, source: &[f64]) {
        for &body in source {
            self.bounds = Some(match self.bounds {
                None => (body, body),
                Some((min, max)) => (min.min(body), max.max(body)),
            });
            let index = self.nodes.len();
            if let Some(last) = self.nodes.last_mut() {
                last.next = Some(index);
            }
            self.nodes.push(Node { body, next: None });
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn head(&self) -> Option<&Node> {
        self.nodes.first()
    }

    pub fn min(&self) -> error::Result<f64> {
        self.bounds
            .map(|(min, _)| min)
            .ok_or(error::Error::EmptyList)
    }

    pub fn max(&self) -> error::Result<f64> {
        self.bounds
            .map(|(_, max)| max)
            .ok_or(error::Error::EmptyList)
    }

    /// Walk the chain from the head.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            next: if self.nodes.is_empty() { None } else { Some(0) },
        }
    }
}

pub struct Iter<'a> {
    nodes: &'a [Node],
    next: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.next?)?;
        self.next = node.next;
        Some(node)
    }
}
