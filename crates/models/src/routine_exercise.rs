use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use uuid::Uuid;
use serde::{Deserialize, Serialize};

use crate::{errors, exercise};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "routine_exercises")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub routine_exercise_id: Uuid,
    pub exercise_id: Uuid,
    pub repetitions: i32,
    #[sea_orm(column_type = "Double")]
    pub weight: f64,
    pub weight_measure: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Exercise }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Exercise => Entity::belongs_to(exercise::Entity)
                .from(Column::ExerciseId)
                .to(exercise::Column::ExerciseId)
                .into(),
        }
    }
}

impl Related<exercise::Entity> for Entity {
    fn to() -> RelationDef { Relation::Exercise.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_repetitions(r: i32) -> Result<(), errors::ModelError> {
    if r < 0 { return Err(errors::ModelError::Validation("repetitions must be >= 0".into())); }
    Ok(())
}

pub fn validate_weight(w: f64) -> Result<(), errors::ModelError> {
    if !w.is_finite() || w < 0.0 {
        return Err(errors::ModelError::Validation("weight must be a finite number >= 0".into()));
    }
    Ok(())
}

pub fn validate_weight_measure(m: &str) -> Result<(), errors::ModelError> {
    if m.trim().is_empty() { return Err(errors::ModelError::Validation("weightMeasure required".into())); }
    if m.chars().count() > 16 { return Err(errors::ModelError::Validation("weightMeasure too long (<=16)".into())); }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    exercise_id: Uuid,
    repetitions: i32,
    weight: f64,
    weight_measure: &str,
) -> Result<Model, errors::ModelError> {
    validate_repetitions(repetitions)?;
    validate_weight(weight)?;
    validate_weight_measure(weight_measure)?;
    let am = ActiveModel {
        routine_exercise_id: Set(Uuid::new_v4()),
        exercise_id: Set(exercise_id),
        repetitions: Set(repetitions),
        weight: Set(weight),
        weight_measure: Set(weight_measure.to_string()),
    };
    Ok(am.insert(db).await?)
}
