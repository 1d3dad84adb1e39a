mod member;

pub use member::{Member, MemberRequest, UpdateMember};
