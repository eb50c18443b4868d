use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "room_types")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub hotel_id: String,
    pub name: String,
    pub description: Option<String>,
    pub max_occupancy: i32,
    pub bed_type: String,
    pub size: Option<String>,
    pub total_rooms: i32,
    pub available_rooms: i32,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hotels::Entity",
        from = "Column::HotelId",
        to = "super::hotels::Column::Id"
    )]
    Hotels,
    #[sea_orm(has_many = "super::room_rates::Entity")]
    RoomRates,
    #[sea_orm(has_many = "super::availability::Entity")]
    Availability,
}

impl Related<super::hotels::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hotels.def()
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

impl ActiveModelBehavior for ActiveModel {}
