// Sequence matching and accepted-path enumeration.
//
// Matching walks labeled arcs one byte at a time and reports where the
// walk stopped. Enumeration is an iterative DFS with an explicit stack;
// arcs are visited in ascending label order, so for a given automaton the
// output order is fixed (lexicographic, shorter strings first).

use crate::automaton::{Fsa, NodeId};

/// Outcome of walking an input byte sequence through the automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    /// Every input byte was consumed and the walk ended on a final arc.
    ExactMatch { node: NodeId },
    /// Every input byte was consumed at an interior position; `node` is
    /// where the input ran out. Empty input reports the start node.
    PrematureEnd { node: NodeId },
    /// No arc matched `input[consumed]`; `node` is where the walk stood.
    Mismatch { node: NodeId, consumed: usize },
    /// The very first input byte has no arc from the start node.
    NoMatch,
}

/// Walk `input` from `start`, one arc per byte.
pub fn match_sequence(fsa: &Fsa, input: &[u8], start: NodeId) -> MatchResult {
    if input.is_empty() {
        return MatchResult::PrematureEnd { node: start };
    }
    let mut node = start;
    let mut ended_final = false;
    for (i, &label) in input.iter().enumerate() {
        match fsa.arc_by_label(node, label) {
            Some(arc) => {
                ended_final = arc.is_final();
                node = arc.target();
            }
            None if i == 0 => return MatchResult::NoMatch,
            None => {
                return MatchResult::Mismatch { node, consumed: i };
            }
        }
    }
    if ended_final {
        MatchResult::ExactMatch { node }
    } else {
        MatchResult::PrematureEnd { node }
    }
}

/// Enumerate every byte string accepted from `node`.
///
/// Returns a lazy iterator; each item is one freshly-owned accepting
/// path. The sequence is finite (the automaton is acyclic by
/// construction) and cannot be restarted.
pub fn accepted_sequences(fsa: &Fsa, node: NodeId) -> AcceptedSequences<'_> {
    AcceptedSequences {
        fsa,
        stack: vec![Frame {
            node,
            next_arc: fsa.nodes[node as usize].first_arc,
        }],
        path: Vec::new(),
    }
}

struct Frame {
    node: NodeId,
    /// Absolute index into the arc table of the next arc to try.
    next_arc: u32,
}

/// Iterator over the accepting paths from a node. See
/// [`accepted_sequences`].
pub struct AcceptedSequences<'a> {
    fsa: &'a Fsa,
    stack: Vec<Frame>,
    path: Vec<u8>,
}

impl Iterator for AcceptedSequences<'_> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        while let Some(top) = self.stack.last_mut() {
            let span = &self.fsa.nodes[top.node as usize];
            if top.next_arc == span.first_arc + span.arc_count {
                self.stack.pop();
                self.path.pop();
                continue;
            }
            let arc = self.fsa.arcs[top.next_arc as usize];
            top.next_arc += 1;
            self.path.push(arc.label);
            self.stack.push(Frame {
                node: arc.target(),
                next_arc: self.fsa.nodes[arc.target() as usize].first_arc,
            });
            if arc.is_final() {
                return Some(self.path.clone());
            }
        }
        None
    }
}
