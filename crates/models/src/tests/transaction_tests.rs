use anyhow::Result;
use sea_orm::{EntityTrait, TransactionTrait};
use uuid::Uuid;

use super::setup_test_db;
use crate::errors::ModelError;
use crate::{exercise, routine, routine_exercise};

/// Test basic transaction commit
#[tokio::test]
async fn test_transaction_commit() -> Result<()> {
    let db = setup_test_db().await?;

    let txn = db.begin().await?;
    let created = routine::create(&txn, Uuid::new_v4(), "Committed", false).await?;
    txn.commit().await?;

    let found = routine::Entity::find_by_id(created.routine_id).one(&db).await?;
    assert!(found.is_some());
    Ok(())
}

/// Test transaction rollback
#[tokio::test]
async fn test_transaction_rollback() -> Result<()> {
    let db = setup_test_db().await?;

    let txn = db.begin().await?;
    let r = routine::create(&txn, Uuid::new_v4(), "Rolled back", false).await?;
    let e = exercise::create(&txn, r.routine_id, "Deadlift", "hamstrings").await?;
    txn.rollback().await?;

    assert!(routine::Entity::find_by_id(r.routine_id).one(&db).await?.is_none());
    assert!(exercise::Entity::find_by_id(e.exercise_id).one(&db).await?.is_none());
    Ok(())
}

/// Exercises cannot point at a routine that does not exist
#[tokio::test]
async fn test_exercise_requires_existing_routine() -> Result<()> {
    let db = setup_test_db().await?;
    let res = exercise::create(&db, Uuid::new_v4(), "Orphan", "none").await;
    assert!(matches!(res, Err(ModelError::Store(_))));
    Ok(())
}

/// A routine that still has exercises cannot be removed directly
#[tokio::test]
async fn test_parent_delete_restricted() -> Result<()> {
    let db = setup_test_db().await?;
    let r = routine::create(&db, Uuid::new_v4(), "Full body", false).await?;
    let e = exercise::create(&db, r.routine_id, "Lunge", "glutes").await?;
    routine_exercise::create(&db, e.exercise_id, 12, 20.0, "kg").await?;

    assert!(routine::Entity::delete_by_id(r.routine_id).exec(&db).await.is_err());
    assert!(exercise::Entity::delete_by_id(e.exercise_id).exec(&db).await.is_err());

    assert!(routine::Entity::find_by_id(r.routine_id).one(&db).await?.is_some());
    assert!(exercise::Entity::find_by_id(e.exercise_id).one(&db).await?.is_some());
    Ok(())
}
