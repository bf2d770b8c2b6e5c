use sea_orm::entity::prelude::*;

/// A waste category (e.g. "Paper", "Furniture").
/// Static reference data, never written through the API.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Name of the icon the client renders next to the category.
    pub icon_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::waste_item::Entity")]
    WasteItem,
}

impl Related<super::waste_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WasteItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
