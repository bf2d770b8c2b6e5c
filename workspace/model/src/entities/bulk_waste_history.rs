use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;

use super::waste_item;

/// One logged disposal of waste that is counted in units.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bulk_waste_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub username: String,
    pub waste_item_id: i32,
    pub units: f64,
    pub modified_date: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "waste_item::Entity",
        from = "Column::WasteItemId",
        to = "waste_item::Column::Id"
    )]
    WasteItem,
}

impl Related<waste_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WasteItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
