//! Fixtures shared by the tests of all crates.

use uuid::{uuid, Uuid};

pub mod contact;

pub const UUID1: Uuid = uuid!("0192f5a4-3c1e-7b21-9d3a-6f0e8c2b4a10");
pub const UUID2: Uuid = uuid!("0192f5a4-3c1f-7c44-8e51-2a9d7b3c5e21");
