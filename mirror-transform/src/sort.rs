//! Dependency ordering for declarations sharing one output file.

use mirrorgen_core::contains_identifier;

/// Compute the emission order for a group of declarations.
///
/// Input: `(target_name, rendered_body)` per declaration, in manifest order.
/// A declaration depends on another when its body contains the other's target
/// name as a whole identifier; dependencies are emitted first.
///
/// The sort is a depth-first traversal with visiting/visited marks. An edge
/// back to a node still being visited indicates a cycle; that edge is skipped
/// rather than reported, so the traversal always terminates and every
/// declaration appears exactly once. Ties and cycles resolve to input order
/// (first seen wins), keeping the output deterministic.
pub fn emission_order(declarations: &[(String, String)]) -> Vec<usize> {
    #[derive(Clone, Copy, PartialEq)]
    enum Mark {
        Unvisited,
        Visiting,
        Visited,
    }

    fn visit(
        i: usize,
        declarations: &[(String, String)],
        marks: &mut [Mark],
        order: &mut Vec<usize>,
    ) {
        marks[i] = Mark::Visiting;
        let body = &declarations[i].1;
        for (j, (name, _)) in declarations.iter().enumerate() {
            if j == i || marks[j] == Mark::Visited {
                continue;
            }
            if marks[j] == Mark::Visiting {
                // Cycle; skip the edge.
                continue;
            }
            if contains_identifier(body, name) {
                visit(j, declarations, marks, order);
            }
        }
        marks[i] = Mark::Visited;
        order.push(i);
    }

    let mut marks = vec![Mark::Unvisited; declarations.len()];
    let mut order = Vec::with_capacity(declarations.len());
    for i in 0..declarations.len() {
        if marks[i] == Mark::Unvisited {
            visit(i, declarations, &mut marks, &mut order);
        }
    }
    order
}
