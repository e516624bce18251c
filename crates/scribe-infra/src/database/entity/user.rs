//! User entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain User.
impl From<Model> for scribe_core::domain::User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from a new Domain User to an insertable ActiveModel.
///
/// The id stays `NotSet` so the database assigns it.
impl From<scribe_core::domain::NewUser> for ActiveModel {
    fn from(user: scribe_core::domain::NewUser) -> Self {
        Self {
            id: sea_orm::ActiveValue::NotSet,
            name: Set(user.name),
            created_at: Set(user.created_at.into()),
            updated_at: Set(user.created_at.into()),
        }
    }
}
