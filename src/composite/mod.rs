pub(crate) mod blend;
pub(crate) mod pixel;
