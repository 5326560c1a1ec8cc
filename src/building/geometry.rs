/**
 * Building geometry
 *
 * Maps building coordinates onto renderer ranks. Floor 0 sits at the top of the
 * drawing, so its rank is the highest; elevators are laid out left to right in id
 * order. Inputs are validated before they reach these functions.
 */

/// Vertical rank of `floor` in a building of `n_floors` floors. Floor 0 ranks highest.
pub fn floor_rank(n_floors: u8, floor: u8) -> u32 {
    u32::from(n_floors).saturating_sub(u32::from(floor) + 1)
}

/// Horizontal slot of elevator `id`.
pub fn elevator_slot(id: u8) -> u32 {
    u32::from(id)
}
