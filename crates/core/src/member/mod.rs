mod functions;
mod types;

pub use functions::{decorate_username, normalize_email, trim_field};
pub use types::{Member, NewMember, ProfileUpdate};
