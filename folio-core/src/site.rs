pub(crate) mod projects;
pub(crate) mod skills;
