use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profile")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub member_id: i32,
    #[sea_orm(unique)]
    pub serial_number: i32,
    pub name: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::MemberId",
        to = "super::member::Column::Id"
    )]
    Member,
    #[sea_orm(has_many = "super::profile_feature::Entity")]
    ProfileFeature,
    #[sea_orm(has_one = "super::profile_image::Entity")]
    ProfileImage,
    #[sea_orm(has_many = "super::member_profile::Entity")]
    MemberProfile,
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl Related<super::profile_feature::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProfileFeature.def()
    }
}

impl Related<super::profile_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProfileImage.def()
    }
}

impl Related<super::member_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MemberProfile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
