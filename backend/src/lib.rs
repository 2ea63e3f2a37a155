pub mod catchers;
pub mod config;
pub mod error;
pub mod pages;
pub mod routes;
pub mod store;
pub mod utils;

use rocket::{Build, Rocket, catchers, routes};
use crate::{
    catchers::{bad_request, internal_error, not_found, unprocessable_entity},
    routes::{create_record, get_record, health, index, show_form, submit_form},
    store::RecordStore,
};

/// Assembles the service around an already-connected store.
pub fn build_rocket(store: RecordStore) -> Rocket<Build> {
    rocket::build()
        .manage(store)
        .mount(
            "/",
            routes![
                create_record,
                get_record,
                index,
                show_form,
                submit_form,
                health
            ],
        )
        .register(
            "/",
            catchers![
                bad_request,
                not_found,
                unprocessable_entity,
                internal_error
            ],
        )
}

#[cfg(test)]
mod tests;
