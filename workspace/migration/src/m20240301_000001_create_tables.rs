use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create accounts table
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(pk_auto(Accounts::Id))
                    .col(string(Accounts::Username))
                    .col(string(Accounts::Password))
                    .col(string(Accounts::Email))
                    .col(string(Accounts::ActivationCode))
                    .col(string(Accounts::Admin))
                    .to_owned(),
            )
            .await?;

        // Create categories table
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(pk_auto(Categories::Id))
                    .col(string(Categories::Name))
                    .col(string(Categories::IconName))
                    .to_owned(),
            )
            .await?;

        // Create wasteitems table
        manager
            .create_table(
                Table::create()
                    .table(WasteItems::Table)
                    .if_not_exists()
                    .col(pk_auto(WasteItems::Id))
                    .col(string(WasteItems::Name))
                    .col(integer(WasteItems::CategoryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wasteitems_category")
                            .from(WasteItems::Table, WasteItems::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // History tables keep rows for items that were removed, so no foreign key
        // on waste_item_id.
        manager
            .create_table(
                Table::create()
                    .table(CommonWasteHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(CommonWasteHistory::Id))
                    .col(string(CommonWasteHistory::Username))
                    .col(integer(CommonWasteHistory::WasteItemId))
                    .col(double(CommonWasteHistory::Weight))
                    .col(date_time(CommonWasteHistory::ModifiedDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BulkWasteHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(BulkWasteHistory::Id))
                    .col(string(BulkWasteHistory::Username))
                    .col(integer(BulkWasteHistory::WasteItemId))
                    .col(double(BulkWasteHistory::Units))
                    .col(date_time(BulkWasteHistory::ModifiedDate))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BulkWasteHistory::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CommonWasteHistory::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(WasteItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
    Username,
    Password,
    Email,
    ActivationCode,
    Admin,
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
    Name,
    IconName,
}

#[derive(DeriveIden)]
enum WasteItems {
    #[sea_orm(iden = "wasteitems")]
    Table,
    Id,
    Name,
    CategoryId,
}

#[derive(DeriveIden)]
enum CommonWasteHistory {
    Table,
    Id,
    Username,
    WasteItemId,
    Weight,
    ModifiedDate,
}

#[derive(DeriveIden)]
enum BulkWasteHistory {
    Table,
    Id,
    Username,
    WasteItemId,
    Units,
    ModifiedDate,
}
