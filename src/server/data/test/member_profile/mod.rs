use crate::server::data::member_profile::MemberProfileRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_by_profile_id;
