use crate::server::data::profile_feature::ProfileFeatureRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_on_profile;
mod update_value;
