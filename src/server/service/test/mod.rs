use crate::{
    model::{profile::ProfileImageType, space::Mood},
    server::{
        error::{
            auth::AuthError, member::MemberError, profile::ProfileError, space::SpaceError,
            AppError,
        },
        model::{
            profile::{
                CreateProfileParams, UpdateFeatureParams, UpdateProfileImageParams,
                UploadedImage, MAX_PROFILE_COUNT,
            },
            space::JoinSpaceParams,
        },
    },
};
use test_utils::{builder::TestBuilder, factory};

mod profile;

fn join_params(character_type: i32, room_type: i32) -> JoinSpaceParams {
    JoinSpaceParams {
        nickname: "cozy room".to_string(),
        character_type,
        room_type,
        mood: Mood::Calm,
        music_url: None,
        status_message: Some("hello".to_string()),
    }
}
