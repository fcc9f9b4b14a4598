use crate::{model::profile::ProfileImageType, server::data::profile_image::ProfileImageRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create_default;
mod update;
