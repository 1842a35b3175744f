use anyhow::Result;
use chrono::{NaiveDate, NaiveTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

use super::memory_db;
use crate::db::ensure_schema;
use crate::{agendamento, fidelidade, review, usuario};

#[tokio::test]
async fn agendamento_insert_assigns_increasing_ids() -> Result<()> {
    let db = memory_db().await?;
    ensure_schema(&db).await?;

    let first = agendamento::ActiveModel {
        name: Set("Ana".into()),
        service: Set(Some("corte".into())),
        data_agendamento: Set(NaiveDate::from_ymd_opt(2024, 5, 1)),
        hora: Set(NaiveTime::from_hms_opt(14, 30, 0)),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    let second = agendamento::ActiveModel {
        name: Set("Bia".into()),
        usuario_id: Set(Some(7)),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    assert!(second.id > first.id);
    assert_eq!(first.hora, NaiveTime::from_hms_opt(14, 30, 0));

    let owned = agendamento::Entity::find()
        .filter(agendamento::Column::UsuarioId.eq(7))
        .all(&db)
        .await?;
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].name, "Bia");
    Ok(())
}

#[tokio::test]
async fn usuario_email_is_unique() -> Result<()> {
    let db = memory_db().await?;
    ensure_schema(&db).await?;

    let insert = |email: Option<&str>| usuario::ActiveModel {
        name: Set("Ana".into()),
        email: Set(email.map(str::to_string)),
        password: Set("hash".into()),
        ..Default::default()
    };

    insert(Some("a@x.com")).insert(&db).await?;
    let dup = insert(Some("a@x.com")).insert(&db).await;
    assert!(dup.is_err());

    // several users without an email are fine
    insert(None).insert(&db).await?;
    insert(None).insert(&db).await?;
    Ok(())
}

#[tokio::test]
async fn review_and_fidelidade_round_trip() -> Result<()> {
    let db = memory_db().await?;
    ensure_schema(&db).await?;

    let r = review::ActiveModel {
        author_name: Set(None),
        content: Set("Ótimo corte".into()),
        rating: Set(5),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    assert_eq!(r.rating, 5);

    let f = fidelidade::ActiveModel {
        usuario_id: Set(Some(r.id)),
        pontos: Set(10),
        status: Set(fidelidade::STATUS_ACTIVE.into()),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    let found = fidelidade::Entity::find_by_id(f.id).one(&db).await?;
    assert_eq!(found.map(|m| m.pontos), Some(10));
    Ok(())
}
