pub mod entities {
    pub use ocdb_entities::{
        category::*, city::*, comment::*, email::*, follow::*, geo::*, id::*, image::*, issue::*,
        nonce::*, password::*, password_reset::*, time::*, user::*, view::*, vote::*,
    };
}

pub mod gateways;
pub mod repositories;
pub mod usecases;
