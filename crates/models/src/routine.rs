use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors, exercise};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "routines")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub routine_id: Uuid,
    pub user_id: Uuid,
    pub date: DateTimeWithTimeZone,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub is_completed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Exercise }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Exercise => Entity::has_many(exercise::Entity).into(),
        }
    }
}

impl Related<exercise::Entity> for Entity {
    fn to() -> RelationDef { Relation::Exercise.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_description(d: &str) -> Result<(), errors::ModelError> {
    if d.trim().is_empty() {
        return Err(errors::ModelError::Validation("description required".into()));
    }
    Ok(())
}

/// Insert a routine dated now. `date` is never taken from the caller.
pub async fn create<C: ConnectionTrait>(
    db: &C,
    user_id: Uuid,
    description: &str,
    is_completed: bool,
) -> Result<Model, errors::ModelError> {
    validate_description(description)?;
    let am = ActiveModel {
        routine_id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        date: Set(Utc::now().into()),
        description: Set(description.to_string()),
        is_completed: Set(is_completed),
    };
    Ok(am.insert(db).await?)
}
