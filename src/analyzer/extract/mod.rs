//! Field extractors. Each is an independent pure function of the input text;
//! none can fail — no match means `None` or an empty collection.

pub mod achievements;
pub mod certifications;
pub mod contact;
pub mod dates;
pub mod duration;
pub mod education;
pub mod experience;
pub mod projects;
pub mod skills;
pub mod summary;
