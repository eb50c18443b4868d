use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "hotels")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub company_id: String,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub city: String,
    pub country: String,
    pub star_rating: i32,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::companies::Entity",
        from = "Column::CompanyId",
        to = "super::companies::Column::Id"
    )]
    Companies,
    #[sea_orm(has_many = "super::room_types::Entity")]
    RoomTypes,
    #[sea_orm(has_many = "super::room_rates::Entity")]
    RoomRates,
    #[sea_orm(has_many = "super::availability::Entity")]
    Availability,
    #[sea_orm(has_many = "super::hotel_images::Entity")]
    HotelImages,
    #[sea_orm(has_many = "super::cancellation_policies::Entity")]
    CancellationPolicies,
}

impl Related<super::companies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Companies.def()
    }
}

impl Related<super::room_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomTypes.def()
    }
}

impl Related<super::room_rates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomRates.def()
    }
}

impl Related<super::availability::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Availability.def()
    }
}

impl Related<super::hotel_images::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HotelImages.def()
    }
}

impl Related<super::cancellation_policies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CancellationPolicies.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
