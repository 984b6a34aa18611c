//! Round segmentation
//!
//! Turns the container's round-start markers into contiguous [`Round`]s that
//! tile the tail of the frame sequence.

use super::error::ReplayError;
use super::types::Round;

/// Split `frame_count` frames into rounds starting at each marker.
///
/// Without markers the whole log is one round. Frames before the first
/// marker belong to no round.
///
/// # Errors
///
/// [`ReplayError::MalformedLog`] when the log has no frames, or a marker is
/// negative, not strictly increasing, or past the last frame.
pub fn segment(frame_count: usize, markers: &[i32]) -> Result<Vec<Round>, ReplayError> {
    if frame_count == 0 {
        return Err(ReplayError::MalformedLog(
            "log has no input frames".to_string(),
        ));
    }

    if markers.is_empty() {
        return Ok(vec![Round {
            start: 0,
            end: frame_count - 1,
        }]);
    }

    let mut starts = Vec::with_capacity(markers.len());
    for (i, &marker) in markers.iter().enumerate() {
        let start = usize::try_from(marker).map_err(|_| {
            ReplayError::MalformedLog(format!("round marker {i} is negative ({marker})"))
        })?;
        if start >= frame_count {
            return Err(ReplayError::MalformedLog(format!(
                "round marker {i} ({start}) is past the last frame ({})",
                frame_count - 1
            )));
        }
        if let Some(&prev) = starts.last()
            && start <= prev
        {
            return Err(ReplayError::MalformedLog(format!(
                "round marker {i} ({start}) does not follow {prev}"
            )));
        }
        starts.push(start);
    }

    let rounds = starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).map_or(frame_count - 1, |&next| next - 1);
            Round { start, end }
        })
        .collect();

    Ok(rounds)
}
