//! Classrooms: front-end rooms, capacity per program, and rooms by size.

use crate::datasets::Classroom;
use crate::from_slice;
use serde::Serialize;
use tracing::debug;

pub const FRONT_END: &str = "FE";
pub const BACK_END: &str = "BE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capacities {
    pub fe_capacity: u32,
    pub be_capacity: u32,
}

/// Rooms assigned to the front-end program.
pub fn fe_classrooms(classrooms: &[Classroom]) -> Vec<Classroom> {
    from_slice(classrooms)
        .filter(|c| c.program == FRONT_END)
        .collect_seq()
}

/// Total seats per program.
///
/// Only the two programs are counted; a room in any other program is left out.
pub fn total_capacities(classrooms: &[Classroom]) -> Capacities {
    from_slice(classrooms).fold(Capacities::default(), |mut acc, room| {
        match room.program.as_str() {
            FRONT_END => acc.fe_capacity += room.capacity,
            BACK_END => acc.be_capacity += room.capacity,
            other => debug!(room = %room.room_letter, program = other, "classroom in neither program"),
        }
        acc
    })
}

/// A copy of `classrooms`, smallest first. Rooms of equal size keep their order.
pub fn sort_by_capacity(classrooms: &[Classroom]) -> Vec<Classroom> {
    from_slice(classrooms).sort_by_key(|c| c.capacity).collect_seq()
}
