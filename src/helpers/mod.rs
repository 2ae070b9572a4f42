pub(crate) mod combine;
pub(crate) mod distinct;
pub(crate) mod joins;
pub(crate) mod keyed;
pub(crate) mod ordering;
pub(crate) mod ratio;
