//! Makes sure every input point survives resampling bit for bit.

use crate::point::{distance, exactly_eq, CurvePoint};

/// Restores every point of `inputs` in `output`.
///
/// Inputs already present verbatim pin their output point. Every other
/// input overwrites the nearest unpinned output point (which then becomes
/// pinned itself). If all outputs are pinned the input is inserted right
/// after its nearest output point instead.
///
/// Returns how many inputs had to be restored.
pub fn guarantee_input_points<P: CurvePoint>(
    output: &mut Vec<P>,
    inputs: &[P],
) -> usize {
    let mut pinned = vec![false; output.len()];
    let mut missing = Vec::new();

    for input in inputs {
        match output.iter().position(|point| exactly_eq(point, input)) {
            Some(index) => pinned[index] = true,
            None => missing.push(*input),
        }
    }

    for input in &missing {
        if let Some(index) = nearest(output, &pinned, input, true) {
            log::debug!("restoring input point over resampled point {index}");
            output[index] = *input;
            pinned[index] = true;
        } else {
            let index = nearest(output, &pinned, input, false)
                .map_or(output.len(), |index| index + 1);
            log::debug!("inserting input point at {index}");
            output.insert(index, *input);
            pinned.insert(index, true);
        }
    }

    missing.len()
}

fn nearest<P: CurvePoint>(
    output: &[P],
    pinned: &[bool],
    target: &P,
    only_unpinned: bool,
) -> Option<usize> {
    output
        .iter()
        .zip(pinned)
        .enumerate()
        .filter(|(_, (_, pinned))| !(only_unpinned && **pinned))
        .map(|(index, (point, _))| (index, distance(point, target)))
        .fold(None, |best: Option<(usize, P::Scalar)>, candidate| match best {
            Some(best) if !(candidate.1 < best.1) => Some(best),
            _ => Some(candidate),
        })
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_points_are_left_alone() {
        let mut output = vec![[0.0f64, 0.0], [0.5, 0.0], [1.0, 0.0]];
        let restored =
            guarantee_input_points(&mut output, &[[0.0, 0.0], [1.0, 0.0]]);
        assert_eq!(restored, 0);
        assert_eq!(output, vec![[0.0, 0.0], [0.5, 0.0], [1.0, 0.0]]);
    }

    #[test]
    fn rounded_points_are_snapped_back() {
        let mut output = vec![[0.0f64, 0.0], [0.5, 0.0], [1.0 + 1e-12, 0.0]];
        let restored =
            guarantee_input_points(&mut output, &[[0.0, 0.0], [1.0, 0.0]]);
        assert_eq!(restored, 1);
        assert_eq!(output, vec![[0.0, 0.0], [0.5, 0.0], [1.0, 0.0]]);
    }

    #[test]
    fn pinned_points_are_not_overwritten() {
        let mut output = vec![[0.0f64, 0.0], [1.0, 0.0], [2.5, 0.0]];
        let inputs = [[0.0, 0.0], [1.0, 0.0], [1.001, 0.0], [2.0, 0.0]];
        let restored = guarantee_input_points(&mut output, &inputs);
        assert_eq!(restored, 2);
        // [1.001, 0] takes the only free slot, [2, 0] has to be inserted.
        assert_eq!(
            output,
            vec![[0.0, 0.0], [1.0, 0.0], [1.001, 0.0], [2.0, 0.0]]
        );
    }

    #[test]
    fn empty_output_receives_inputs() {
        let mut output: Vec<[f32; 3]> = Vec::new();
        guarantee_input_points(&mut output, &[[1.0, 2.0, 3.0]]);
        assert_eq!(output, vec![[1.0, 2.0, 3.0]]);
    }
}
