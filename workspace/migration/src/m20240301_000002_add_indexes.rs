use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Registration checks for an existing email before inserting. The unique
        // index makes the losing side of two concurrent registrations fail instead
        // of inserting a duplicate.
        manager
            .create_index(
                Index::create()
                    .name("idx-accounts-email")
                    .table(Accounts::Table)
                    .col(Accounts::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-wasteitems-category")
                    .table(WasteItems::Table)
                    .col(WasteItems::CategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-common-waste-history-username")
                    .table(CommonWasteHistory::Table)
                    .col(CommonWasteHistory::Username)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-bulk-waste-history-username")
                    .table(BulkWasteHistory::Table)
                    .col(BulkWasteHistory::Username)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx-bulk-waste-history-username")
                    .table(BulkWasteHistory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx-common-waste-history-username")
                    .table(CommonWasteHistory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx-wasteitems-category")
                    .table(WasteItems::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx-accounts-email")
                    .table(Accounts::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Email,
}

#[derive(DeriveIden)]
enum WasteItems {
    #[sea_orm(iden = "wasteitems")]
    Table,
    CategoryId,
}

#[derive(DeriveIden)]
enum CommonWasteHistory {
    Table,
    Username,
}

#[derive(DeriveIden)]
enum BulkWasteHistory {
    Table,
    Username,
}
