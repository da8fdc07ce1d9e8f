//! Path reconstruction from a predecessor array

/// Walk predecessors back from `target` to `source`
///
/// `target` must have a finite distance, so the chain always ends at `source`.
pub(super) fn reconstruct_path(
    source: usize,
    target: usize,
    predecessors: &[Option<usize>],
) -> Vec<usize> {
    let mut path = vec![target];
    let mut current = target;

    while current != source {
        match predecessors[current] {
            Some(pred) => {
                current = pred;
                path.push(current);
            }
            None => break,
        }
    }

    path.reverse();
    path
}
