pub(crate) mod backdrop;
pub(crate) mod field;
pub(crate) mod scene3d;
