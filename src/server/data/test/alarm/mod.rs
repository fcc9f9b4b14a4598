use crate::server::data::alarm::AlarmRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_by_space_id;
