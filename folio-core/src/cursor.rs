pub(crate) mod burst;
pub(crate) mod overlay;
pub(crate) mod renderer;
