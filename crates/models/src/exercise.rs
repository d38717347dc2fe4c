use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use uuid::Uuid;
use serde::{Deserialize, Serialize};

use crate::{errors, routine, routine_exercise};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "exercises")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub exercise_id: Uuid,
    pub routine_id: Uuid,
    pub name: String,
    pub muscle: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Routine, RoutineExercise }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Routine => Entity::belongs_to(routine::Entity)
                .from(Column::RoutineId)
                .to(routine::Column::RoutineId)
                .into(),
            Relation::RoutineExercise => Entity::has_many(routine_exercise::Entity).into(),
        }
    }
}

impl Related<routine::Entity> for Entity {
    fn to() -> RelationDef { Relation::Routine.def() }
}

impl Related<routine_exercise::Entity> for Entity {
    fn to() -> RelationDef { Relation::RoutineExercise.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(n: &str) -> Result<(), errors::ModelError> {
    if n.trim().is_empty() { return Err(errors::ModelError::Validation("name required".into())); }
    if n.chars().count() > 128 { return Err(errors::ModelError::Validation("name too long (<=128)".into())); }
    Ok(())
}

pub fn validate_muscle(m: &str) -> Result<(), errors::ModelError> {
    if m.trim().is_empty() { return Err(errors::ModelError::Validation("muscle required".into())); }
    if m.chars().count() > 64 { return Err(errors::ModelError::Validation("muscle too long (<=64)".into())); }
    Ok(())
}

/// Insert an exercise under `routine_id`. A missing routine surfaces as a
/// foreign-key failure from the store.
pub async fn create<C: ConnectionTrait>(db: &C, routine_id: Uuid, name: &str, muscle: &str) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    validate_muscle(muscle)?;
    let am = ActiveModel {
        exercise_id: Set(Uuid::new_v4()),
        routine_id: Set(routine_id),
        name: Set(name.to_string()),
        muscle: Set(muscle.to_string()),
    };
    Ok(am.insert(db).await?)
}
