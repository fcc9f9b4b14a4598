use crate::{
    model::space::Mood,
    server::{
        data::{
            plan::PlanRepository, space::SpaceRepository, space_image::SpaceImageRepository,
        },
        model::space::JoinSpaceParams,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_children;

fn join_params(nickname: &str) -> JoinSpaceParams {
    JoinSpaceParams {
        nickname: nickname.to_string(),
        character_type: 3,
        room_type: 2,
        mood: Mood::Excited,
        music_url: Some("https://music.example.com/track".to_string()),
        status_message: None,
    }
}
