use crate::server::{
    data::member::MemberRepository,
    model::member::{Social, UpsertMemberParam},
};
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_email;
