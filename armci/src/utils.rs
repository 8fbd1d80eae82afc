use crate::error::Error;

/// Copies the values of the joints named in `to_names` out of a full
/// `(from_names, from_positions)` state, matching by name.
pub fn copy_joint_positions(
    from_names: &[String],
    from_positions: &[f64],
    to_names: &[String],
    to_positions: &mut [f64],
) -> Result<(), Error> {
    if from_names.len() != from_positions.len() {
        return Err(Error::LengthMismatch {
            model: from_names.len(),
            input: from_positions.len(),
        });
    }
    if to_names.len() != to_positions.len() {
        return Err(Error::LengthMismatch {
            model: to_names.len(),
            input: to_positions.len(),
        });
    }
    for (to_position, to_name) in to_positions.iter_mut().zip(to_names) {
        let from_index = from_names
            .iter()
            .position(|from_name| from_name == to_name)
            .ok_or_else(|| Error::NoJoint(to_name.to_owned()))?;
        *to_position = from_positions[from_index];
    }
    Ok(())
}
