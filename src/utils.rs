mod generate_xid;
mod now;

pub use generate_xid::generate_xid;
pub use now::now;
