use crate::server::{
    error::{auth::AuthError, profile::ProfileError, AppError},
    middleware::{
        auth::{RequesterId, MEMBER_ID_HEADER},
        precondition::PreconditionGuard,
        session::CsrfSession,
    },
};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
