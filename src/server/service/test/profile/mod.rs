use super::*;
use crate::server::service::profile::ProfileService;

mod create;
mod delete;
mod read;
mod update;
mod update_image;

fn create_params(name: &str) -> CreateProfileParams {
    CreateProfileParams {
        name: name.to_string(),
    }
}
